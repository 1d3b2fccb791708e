use std::io::{self, Write};

use crate::config::Config;
use crate::error::{FiveCallsError, Result};

pub async fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        print!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        );
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("5calls CLI Configuration");
    println!("========================\n");

    print!("Enter your address or zip code (used to find your representatives) [optional]: ");
    io::stdout().flush()?;

    let mut address = String::new();
    io::stdin().read_line(&mut address)?;
    let address = address.trim();

    // Create config directory if it doesn't exist
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| FiveCallsError::ConfigRead {
            path: config_path.clone(),
            source: e,
        })?;
    }

    let config_content = render_config(address)?;

    std::fs::write(&config_path, config_content).map_err(|e| FiveCallsError::ConfigRead {
        path: config_path.clone(),
        source: e,
    })?;

    println!("\nConfig saved to {}", config_path.display());
    println!("You can now use 'fivecalls issues'!");

    Ok(())
}

/// Render the config file contents. Addresses come from free-form user
/// input, so the value goes through the TOML serializer rather than
/// string interpolation.
fn render_config(address: &str) -> Result<String> {
    let mut table = toml::Table::new();
    if !address.is_empty() {
        table.insert(
            "address".to_string(),
            toml::Value::String(address.to_string()),
        );
    }

    Ok(toml::to_string(&table)?)
}

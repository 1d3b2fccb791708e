use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use fivecalls_cli::cli::{Cli, Commands, IssueCommands};
use fivecalls_cli::config::Config;
use fivecalls_cli::error::Result;
use fivecalls_cli::{commands, output, FiveCallsClient};
use std::error::Error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");

        // Show error chain if verbose flag was passed
        if std::env::args().any(|arg| arg == "--verbose" || arg == "-v") {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = std::error::Error::source(cause);
            }
        }

        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    output::set_json_output(cli.json);

    match cli.command {
        // Commands that don't require config/client
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "fivecalls", &mut io::stdout());
        }
        Commands::Init => {
            commands::init::run().await?;
        }
        // Commands that require config and client
        command => {
            let config = Config::load()?;
            let client = match config.api_url() {
                Some(endpoint) => FiveCallsClient::with_endpoint(&endpoint)?,
                None => FiveCallsClient::new()?,
            };

            match command {
                Commands::Issues(args) => {
                    commands::issues::list(&client, &config, args).await?;
                }
                Commands::Issue { action } => match action {
                    IssueCommands::List(args) => {
                        commands::issues::list(&client, &config, args).await?;
                    }
                    IssueCommands::Show(args) => {
                        commands::issues::show(&client, &config, args).await?;
                    }
                },
                Commands::Completions { .. } | Commands::Init => {
                    // Already handled above
                }
            }
        }
    }

    Ok(())
}

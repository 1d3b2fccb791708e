use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;

use crate::error::{FiveCallsError, Result};

#[derive(Deserialize, Default)]
pub struct Config {
    /// Default address/zip to filter issues by.
    pub address: Option<String>,
    /// Override for the API endpoint. Mostly for staging setups.
    pub api_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| FiveCallsError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        toml::from_str(&contents).map_err(|e| FiveCallsError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "fivecalls")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(FiveCallsError::NoConfigDir)
    }

    /// Get the location filter, preferring the explicit argument, then
    /// the FIVECALLS_ADDRESS env var, then the config file.
    pub fn resolve_address(&self, explicit: Option<&str>) -> Option<String> {
        explicit
            .map(String::from)
            .or_else(|| std::env::var("FIVECALLS_ADDRESS").ok())
            .or_else(|| self.address.clone())
    }

    /// Get the API endpoint with env var taking precedence over config file.
    pub fn api_url(&self) -> Option<String> {
        std::env::var("FIVECALLS_API_URL")
            .ok()
            .or_else(|| self.api_url.clone())
    }
}

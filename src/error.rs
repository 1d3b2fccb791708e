use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FiveCallsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unexpected HTTP status {status} from issues endpoint")]
    UnexpectedStatus { status: u16 },

    #[error("Failed to decode issues payload: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid API endpoint {endpoint}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Issue not found: {0}")]
    IssueNotFound(String),

    #[error("Invalid coordinates (expected LAT,LON): {0}")]
    InvalidCoordinates(String),
}

pub type Result<T> = std::result::Result<T, FiveCallsError>;

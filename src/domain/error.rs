use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CallerIdError {
    #[error("Caller ID lookup timed out after {0:?}")]
    Timeout(Duration),

    #[error("Lookup error: {0}")]
    Lookup(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

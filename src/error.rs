//! Error types for locations

use thiserror::Error;

/// Main error type for locations operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Geocoding error: {0}")]
    Geocoding(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for locations operations
pub type Result<T> = std::result::Result<T, Error>;

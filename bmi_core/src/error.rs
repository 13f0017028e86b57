//! Error types for the bmi_core library.

use std::io;
use std::path::PathBuf;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for bmi_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred while touching the record store or config
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The record store has never been created
    #[error("No data found at {}", .0.display())]
    NotFound(PathBuf),

    /// Input outside the accepted ranges
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// True when the store was absent; callers recover from this one
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

//! Error types for the API

use thiserror::Error;

/// Error type for API operations.
///
/// Text processing itself never fails; only configuration does.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unknown language code
    #[error("Invalid language: {0}")]
    InvalidLanguage(String),

    /// Malformed locale config document
    #[error("Parse error: {0}")]
    Parse(String),

    /// Reading a locale config file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;

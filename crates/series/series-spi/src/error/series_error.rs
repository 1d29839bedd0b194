//! Series error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while generating, loading or saving a time series.
#[derive(Debug, Error)]
pub enum SeriesError {
    /// Generator or loader configuration is unusable
    #[error("Invalid configuration '{name}': {reason}")]
    InvalidConfig { name: String, reason: String },

    /// Series contents violate a model invariant
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// A timestamp or value field could not be parsed
    #[error("Parse error at row {row}: {reason}")]
    ParseError { row: usize, reason: String },

    /// Underlying file could not be opened, read or written
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV encoding or decoding failed
    #[error("CSV error on '{}': {message}", path.display())]
    Csv { path: PathBuf, message: String },
}

/// Result type for series operations.
pub type Result<T> = std::result::Result<T, SeriesError>;

impl SeriesError {
    /// Shorthand for [`SeriesError::InvalidConfig`].
    pub fn invalid_config(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

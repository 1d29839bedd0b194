//! Report error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while writing reports.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV error at {}: {message}", path.display())]
    Csv { path: PathBuf, message: String },

    #[error("Plot error at {}: {message}", path.display())]
    Plot { path: PathBuf, message: String },

    #[error("Nothing to report: {0}")]
    EmptyInput(String),
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

//! Error types for report sinks.

mod report_error;

pub use report_error::{ReportError, Result};

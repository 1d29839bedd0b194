//! Error types for series generation and persistence.

mod series_error;

pub use series_error::{Result, SeriesError};

//! Series Service Provider Interface
//!
//! Defines the time series model, the random-source contract used by
//! generators, and the error type shared by the series crates.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{RandomSource, SeriesGenerator};
pub use error::{Result, SeriesError};
pub use model::{Observation, TimeSeries, TIMESTAMP_FORMAT};

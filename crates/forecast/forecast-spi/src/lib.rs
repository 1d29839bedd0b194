//! Forecast Service Provider Interface
//!
//! Defines the pluggable model-fitting capability used by the detection
//! pipeline:
//!
//! - [`Forecaster`]: fits a model of a given [`ArimaOrder`] to a series
//! - [`FittedModel`]: immutable fitted model with in-sample prediction
//! - [`ForecastError`]: standardized error type for fitting and prediction

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{FittedModel, Forecaster};
pub use error::{ForecastError, Result};
pub use model::{ArimaOrder, ModelSummary};

//! Forecast error types
//!
//! This module contains error types and the Result alias.

mod forecast_error;

pub use forecast_error::{ForecastError, Result};

//! Forecast Facade
//!
//! High-level API for ARIMA fitting. Re-exports all public types from the
//! forecast stack for convenient usage.
//!
//! # Example
//!
//! ```rust
//! use forecast_facade::prelude::*;
//!
//! let data: Vec<f64> = (0..48).map(|t| 40.0 + 10.0 * (t as f64 / 4.0).sin()).collect();
//! let model = ArimaEstimator::default().fit(&data, ArimaOrder::new(2, 0, 0).unwrap()).unwrap();
//! assert_eq!(model.predict_in_sample(0..48).unwrap().len(), 48);
//! ```

// Re-export everything from API (config types plus SPI contracts)
pub use forecast_api::*;

// Re-export implementations from core
pub use forecast_core::{arima, differencing, linalg, prelude, ArimaEstimator, FittedArima};

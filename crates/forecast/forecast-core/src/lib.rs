//! Forecast Core
//!
//! ARIMA estimation behind the [`Forecaster`] contract:
//!
//! - [`arima`]: Yule-Walker / Hannan-Rissanen estimator and the fitted model
//! - [`differencing`]: differencing and one-step undifferencing
//! - [`linalg`]: Levinson-Durbin recursion and small dense solvers
//!
//! ## Example
//!
//! ```rust
//! use forecast_core::prelude::*;
//!
//! let data: Vec<f64> = (0..60).map(|x| x as f64 + (x as f64 * 0.7).sin()).collect();
//! let model = ArimaEstimator::default()
//!     .fit(&data, ArimaOrder::new(1, 1, 0).unwrap())
//!     .unwrap();
//! let fitted = model.fitted_values().unwrap();
//! assert_eq!(fitted.len(), data.len());
//! ```

pub mod arima;
pub mod differencing;
pub mod linalg;

// Re-export SPI traits for implementations
pub use forecast_spi::{ArimaOrder, FittedModel, ForecastError, Forecaster, ModelSummary, Result};

pub use arima::{ArimaEstimator, FittedArima};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::arima::{ArimaEstimator, FittedArima};
    pub use forecast_api::{ArimaConfig, ArimaConfigBuilder};
    pub use forecast_spi::{ArimaOrder, FittedModel, ForecastError, Forecaster, Result};
}

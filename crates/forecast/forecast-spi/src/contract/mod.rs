//! Contract definitions for forecasting.
//!
//! This module contains trait definitions that providers must implement.

mod fitted_model;
mod forecaster;

pub use fitted_model::FittedModel;
pub use forecaster::Forecaster;

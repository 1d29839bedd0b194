//! Data models for forecasting.

mod arima_order;
mod model_summary;

pub use arima_order::ArimaOrder;
pub use model_summary::ModelSummary;

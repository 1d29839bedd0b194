//! Data models for hourly time series.

mod observation;
mod time_series;

pub use observation::{Observation, TIMESTAMP_FORMAT};
pub use time_series::TimeSeries;

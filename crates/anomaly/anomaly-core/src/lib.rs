//! Anomaly Detection Core
//!
//! Residual statistics and the residual analyzer.

pub mod residual;
pub mod stats;

pub use residual::ResidualAnalyzer;
pub use stats::{mean, std_dev};

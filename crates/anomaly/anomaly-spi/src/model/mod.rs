//! Data models for anomaly detection.
//!
//! This module contains data structures used throughout the anomaly detection system.

mod annotated_record;
mod residual_analysis;
mod threshold_bounds;

pub use annotated_record::{AnnotatedRecord, AnnotatedSeries};
pub use residual_analysis::ResidualAnalysis;
pub use threshold_bounds::ThresholdBounds;

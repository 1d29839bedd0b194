//! Contract definitions for anomaly detection.
//!
//! This module contains trait definitions that providers must implement.

mod residual_detector;

pub use residual_detector::ResidualDetector;

//! Anomaly Detection Facade
//!
//! Unified re-exports for residual-based anomaly detection.
//!
//! This facade provides a single entry point to:
//! - `ResidualDetector` trait and result models from SPI
//! - `ResidualConfig` and its builder from API
//! - `ResidualAnalyzer` and the summary statistics from Core
//!
//! # Example
//!
//! ```rust
//! use anomaly_facade::{ResidualAnalyzer, ResidualDetector};
//!
//! let observed = [10.0, 10.0, 10.0, 10.0, 100.0];
//! let predicted = [10.0; 5];
//! let analysis = ResidualAnalyzer::new(1.5).unwrap().analyze(&observed, &predicted).unwrap();
//! assert_eq!(analysis.anomaly_indices(), vec![4]);
//! ```

// Re-export everything from API (config types plus SPI contracts)
pub use anomaly_api::*;

// Re-export implementations from Core
pub use anomaly_core::*;

//! Report Service Provider Interface
//!
//! Defines the sink contract through which annotated detection results leave
//! the pipeline.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::ReportSink;
pub use error::{ReportError, Result};
pub use model::{ReportKind, ReportSummary};

pub use anomaly_spi::{AnnotatedRecord, ThresholdBounds};

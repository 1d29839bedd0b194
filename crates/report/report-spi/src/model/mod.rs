//! Data models for report sinks.

mod report_summary;

pub use report_summary::{ReportKind, ReportSummary};

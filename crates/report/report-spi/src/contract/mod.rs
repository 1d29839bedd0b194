//! Contract definitions for report sinks.

mod report_sink;

pub use report_sink::ReportSink;

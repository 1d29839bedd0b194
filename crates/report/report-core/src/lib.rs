//! Report Core
//!
//! Sinks that turn annotated detection results into files:
//!
//! - [`CsvReportWriter`]: anomalous rows only, one per flagged hour
//! - [`PlotRenderer`]: observed vs. predicted chart with anomaly markers

pub mod csv_report;
pub mod plot;

pub use csv_report::{CsvReportWriter, REPORT_HEADER};
pub use plot::{PlotRenderer, PlotStyle};

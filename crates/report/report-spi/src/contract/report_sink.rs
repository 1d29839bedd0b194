//! Report sink trait definition.

use anomaly_spi::{AnnotatedRecord, ThresholdBounds};

use crate::error::Result;
use crate::model::{ReportKind, ReportSummary};

/// Destination for annotated detection results.
///
/// Sinks only read the records; every sink sees the same slice.
pub trait ReportSink {
    /// Kind of artifact this sink produces.
    fn kind(&self) -> ReportKind;

    /// Write a report for `records` classified against `bounds`.
    fn emit(&self, records: &[AnnotatedRecord], bounds: &ThresholdBounds) -> Result<ReportSummary>;
}

//! Anomaly CSV report.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anomaly_spi::{AnnotatedRecord, ThresholdBounds};
use report_spi::{ReportError, ReportKind, ReportSink, ReportSummary, Result};
use serde::Serialize;
use series_spi::TIMESTAMP_FORMAT;
use tracing::info;

/// Column order of the report file.
pub const REPORT_HEADER: [&str; 5] = [
    "timestamp",
    "cpu_percent",
    "predicted",
    "residual",
    "is_anomaly",
];

#[derive(Debug, Serialize)]
struct ReportRow {
    timestamp: String,
    cpu_percent: f64,
    predicted: f64,
    residual: f64,
    is_anomaly: bool,
}

impl From<&AnnotatedRecord> for ReportRow {
    fn from(record: &AnnotatedRecord) -> Self {
        Self {
            timestamp: record.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            cpu_percent: record.cpu_percent,
            predicted: record.predicted,
            residual: record.residual,
            is_anomaly: record.is_anomaly,
        }
    }
}

/// Writes the anomalous subset of a run to CSV.
///
/// The header is always present, so a run without anomalies still produces a
/// well-formed (header-only) file.
#[derive(Debug, Clone)]
pub struct CsvReportWriter {
    path: PathBuf,
}

impl CsvReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write anomalous `records` in their original order.
    ///
    /// Returns the number of data rows written.
    pub fn write(&self, records: &[AnnotatedRecord]) -> Result<usize> {
        let file = File::create(&self.path).map_err(|source| self.io_error(source))?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(BufWriter::new(file));

        writer
            .write_record(REPORT_HEADER)
            .map_err(|e| self.csv_error(e))?;

        let mut rows = 0;
        for record in records.iter().filter(|r| r.is_anomaly) {
            writer
                .serialize(ReportRow::from(record))
                .map_err(|e| self.csv_error(e))?;
            rows += 1;
        }
        writer.flush().map_err(|source| self.io_error(source))?;

        info!(path = %self.path.display(), rows, "anomaly report written");
        Ok(rows)
    }

    fn io_error(&self, source: std::io::Error) -> ReportError {
        ReportError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn csv_error(&self, e: csv::Error) -> ReportError {
        ReportError::Csv {
            path: self.path.clone(),
            message: e.to_string(),
        }
    }
}

impl ReportSink for CsvReportWriter {
    fn kind(&self) -> ReportKind {
        ReportKind::Csv
    }

    fn emit(&self, records: &[AnnotatedRecord], _bounds: &ThresholdBounds) -> Result<ReportSummary> {
        let rows = self.write(records)?;
        Ok(ReportSummary::new(ReportKind::Csv, &self.path, rows))
    }
}

//! Outcome of a report sink.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Kind of artifact a sink produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Csv,
    Plot,
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportKind::Csv => write!(f, "CSV report"),
            ReportKind::Plot => write!(f, "plot"),
        }
    }
}

/// What a sink wrote and where.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub kind: ReportKind,
    pub path: PathBuf,
    /// Anomalous records contained in the artifact
    pub anomalies: usize,
}

impl ReportSummary {
    pub fn new(kind: ReportKind, path: impl Into<PathBuf>, anomalies: usize) -> Self {
        Self {
            kind,
            path: path.into(),
            anomalies,
        }
    }
}

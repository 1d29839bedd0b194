//! Per-timestep records joined with model output and classification.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::ThresholdBounds;

/// One input time step after prediction and classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedRecord {
    pub timestamp: NaiveDateTime,
    /// Observed CPU utilization
    pub cpu_percent: f64,
    /// In-sample model prediction
    pub predicted: f64,
    /// `cpu_percent - predicted`
    pub residual: f64,
    pub is_anomaly: bool,
}

/// All records of one run together with the bounds used to classify them.
///
/// Built once by the analyzer and only read afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedSeries {
    records: Vec<AnnotatedRecord>,
    bounds: ThresholdBounds,
}

impl AnnotatedSeries {
    pub fn new(records: Vec<AnnotatedRecord>, bounds: ThresholdBounds) -> Self {
        Self { records, bounds }
    }

    pub fn records(&self) -> &[AnnotatedRecord] {
        &self.records
    }

    pub fn bounds(&self) -> &ThresholdBounds {
        &self.bounds
    }

    /// Flagged records in time order.
    pub fn anomalies(&self) -> impl Iterator<Item = &AnnotatedRecord> + '_ {
        self.records.iter().filter(|r| r.is_anomaly)
    }

    pub fn anomaly_count(&self) -> usize {
        self.anomalies().count()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

//! Residual analysis result types.

use serde::{Deserialize, Serialize};

use crate::model::ThresholdBounds;

/// Per-index residuals and flags plus the bounds they were judged against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResidualAnalysis {
    /// `observed - predicted` for each index
    pub residuals: Vec<f64>,
    /// Boolean mask indicating anomalies
    pub is_anomaly: Vec<bool>,
    /// Threshold used for detection
    pub bounds: ThresholdBounds,
}

impl ResidualAnalysis {
    /// Create a new analysis result.
    pub fn new(residuals: Vec<f64>, is_anomaly: Vec<bool>, bounds: ThresholdBounds) -> Self {
        Self {
            residuals,
            is_anomaly,
            bounds,
        }
    }

    /// Get indices of detected anomalies.
    pub fn anomaly_indices(&self) -> Vec<usize> {
        self.is_anomaly
            .iter()
            .enumerate()
            .filter_map(|(i, &is_anomaly)| if is_anomaly { Some(i) } else { None })
            .collect()
    }

    /// Count of detected anomalies.
    pub fn anomaly_count(&self) -> usize {
        self.is_anomaly.iter().filter(|&&x| x).count()
    }

    pub fn len(&self) -> usize {
        self.residuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residuals.is_empty()
    }
}

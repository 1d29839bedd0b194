//! Anomaly Detection API
//!
//! Configuration types and builders for residual-based anomaly detection.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use anomaly_spi::{
    AnnotatedRecord, AnnotatedSeries, AnomalyError, ResidualAnalysis, ResidualDetector, Result,
    ThresholdBounds,
};

/// Default sigma multiplier.
pub const DEFAULT_THRESHOLD: f64 = 2.5;

/// Denominator used for the residual standard deviation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StdDevKind {
    /// Divide by `n - 1`
    #[default]
    Sample,
    /// Divide by `n`
    Population,
}

/// Residual analyzer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResidualConfig {
    /// Sigma multiplier `k` for the dynamic threshold (default: 2.5).
    pub threshold: f64,
    /// Standard deviation estimator (default: sample).
    pub std_dev_kind: StdDevKind,
}

impl Default for ResidualConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            std_dev_kind: StdDevKind::Sample,
        }
    }
}

impl ResidualConfig {
    pub fn new(threshold: f64, std_dev_kind: StdDevKind) -> Self {
        Self {
            threshold,
            std_dev_kind,
        }
    }

    /// Reject negative or non-finite multipliers.
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(AnomalyError::InvalidParameter {
                name: "threshold".to_string(),
                reason: format!("must be a finite, non-negative number, got {}", self.threshold),
            });
        }
        Ok(())
    }
}

/// Builder for [`ResidualConfig`].
#[derive(Debug, Default)]
pub struct ResidualConfigBuilder {
    config: ResidualConfig,
}

impl ResidualConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.config.threshold = threshold;
        self
    }

    pub fn std_dev_kind(mut self, kind: StdDevKind) -> Self {
        self.config.std_dev_kind = kind;
        self
    }

    pub fn build(self) -> Result<ResidualConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

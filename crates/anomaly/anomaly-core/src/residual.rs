//! Residual-based anomaly detection.
//!
//! A point is anomalous when its residual leaves the band
//! `mean ± k * std_dev`, where both statistics are taken over every residual
//! of the run. The band is global, not windowed, so it assumes the residual
//! variance is roughly stationary across the series.

use anomaly_api::{ResidualConfig, StdDevKind};
use anomaly_spi::{
    AnnotatedRecord, AnnotatedSeries, AnomalyError, ResidualAnalysis, ResidualDetector, Result,
    ThresholdBounds,
};
use series_spi::TimeSeries;
use tracing::{debug, info};

use crate::stats::{mean, std_dev};

/// Classifies points by comparing residuals with a dynamic threshold.
#[derive(Debug, Clone, Copy)]
pub struct ResidualAnalyzer {
    config: ResidualConfig,
}

impl ResidualAnalyzer {
    /// Create an analyzer with sigma multiplier `threshold` and sample deviation.
    pub fn new(threshold: f64) -> Result<Self> {
        Self::from_config(ResidualConfig::new(threshold, StdDevKind::Sample))
    }

    /// Create from configuration.
    pub fn from_config(config: ResidualConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ResidualConfig {
        &self.config
    }

    /// Threshold bounds of a residual population.
    pub fn bounds(&self, residuals: &[f64]) -> Result<ThresholdBounds> {
        if residuals.is_empty() {
            return Err(AnomalyError::EmptyInput);
        }
        let mu = mean(residuals);
        let sigma = std_dev(residuals, mu, self.config.std_dev_kind);
        Ok(ThresholdBounds::new(mu, sigma, self.config.threshold))
    }

    /// Analyze `series` against `predicted` and join everything into records.
    pub fn annotate(&self, series: &TimeSeries, predicted: &[f64]) -> Result<AnnotatedSeries> {
        let observed = series.values();
        let analysis = self.analyze(&observed, predicted)?;

        let records = series
            .iter()
            .zip(predicted)
            .zip(analysis.residuals.iter().zip(&analysis.is_anomaly))
            .map(|((obs, &predicted), (&residual, &is_anomaly))| AnnotatedRecord {
                timestamp: obs.timestamp,
                cpu_percent: obs.value,
                predicted,
                residual,
                is_anomaly,
            })
            .collect();

        Ok(AnnotatedSeries::new(records, analysis.bounds))
    }

    fn check_input(observed: &[f64], predicted: &[f64]) -> Result<()> {
        if observed.len() != predicted.len() {
            return Err(AnomalyError::LengthMismatch {
                observed: observed.len(),
                predicted: predicted.len(),
            });
        }
        if observed.is_empty() {
            return Err(AnomalyError::EmptyInput);
        }
        if let Some(i) = observed.iter().position(|v| !v.is_finite()) {
            return Err(AnomalyError::InvalidData(format!(
                "observed[{}] is {}",
                i, observed[i]
            )));
        }
        if let Some(i) = predicted.iter().position(|v| !v.is_finite()) {
            return Err(AnomalyError::InvalidData(format!(
                "predicted[{}] is {}",
                i, predicted[i]
            )));
        }
        Ok(())
    }
}

impl Default for ResidualAnalyzer {
    fn default() -> Self {
        Self {
            config: ResidualConfig::default(),
        }
    }
}

impl ResidualDetector for ResidualAnalyzer {
    fn residuals(&self, observed: &[f64], predicted: &[f64]) -> Result<Vec<f64>> {
        Self::check_input(observed, predicted)?;
        Ok(observed.iter().zip(predicted).map(|(o, p)| o - p).collect())
    }

    fn analyze(&self, observed: &[f64], predicted: &[f64]) -> Result<ResidualAnalysis> {
        let residuals = self.residuals(observed, predicted)?;
        let bounds = self.bounds(&residuals)?;
        debug!(
            mean = bounds.mean,
            std_dev = bounds.std_dev,
            upper = bounds.upper,
            lower = bounds.lower,
            "derived residual threshold"
        );

        let is_anomaly: Vec<bool> = residuals.iter().map(|&r| bounds.is_outside(r)).collect();
        let analysis = ResidualAnalysis::new(residuals, is_anomaly, bounds);

        info!(
            points = analysis.len(),
            anomalies = analysis.anomaly_count(),
            threshold = bounds.multiplier,
            "classified residuals"
        );
        Ok(analysis)
    }
}

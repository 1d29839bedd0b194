//! Synthetic series configuration types.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use series_spi::{Result, SeriesError};

/// Shape of the synthetic CPU signal and where to inject anomalies.
///
/// The signal is `base_level + amplitude * sin(2πt / period) + slope * t`
/// plus Gaussian noise, clipped to `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of days to simulate
    pub days: usize,
    /// Samples per day
    pub hours_per_day: usize,
    /// Seed for the random source
    pub seed: u64,
    /// Mean utilization the signal oscillates around
    pub base_level: f64,
    /// Peak deviation of the daily cycle
    pub amplitude: f64,
    /// Length of one seasonal cycle in samples
    pub period: f64,
    /// Linear trend added per sample
    pub slope: f64,
    /// Standard deviation of the additive noise
    pub noise_std: f64,
    /// Sample indices that receive an injected anomaly
    pub anomaly_indices: Vec<usize>,
    /// Offsets an injected anomaly is drawn from (spike up / crash down)
    pub anomaly_magnitudes: Vec<f64>,
    /// Timestamp of the first sample
    pub start: NaiveDateTime,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            days: 30,
            hours_per_day: 24,
            seed: 42,
            base_level: 40.0,
            amplitude: 10.0,
            period: 24.0,
            slope: 0.05,
            noise_std: 2.0,
            anomaly_indices: vec![50, 120, 300, 550, 680],
            anomaly_magnitudes: vec![30.0, -25.0],
            start: default_start(),
        }
    }
}

fn default_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap_or_default()
        .and_time(NaiveTime::default())
}

/// Largest series the generator will stamp; timestamps are offset by an `i32` step count.
pub const MAX_POINTS: usize = i32::MAX as usize;

impl GeneratorConfig {
    /// Total number of samples (`days * hours_per_day`), saturating on overflow.
    pub fn total_points(&self) -> usize {
        self.days.saturating_mul(self.hours_per_day)
    }

    /// Check every field, returning the first violation found.
    pub fn validate(&self) -> Result<()> {
        if self.days == 0 {
            return Err(SeriesError::invalid_config("days", "must be positive"));
        }
        if self.hours_per_day == 0 {
            return Err(SeriesError::invalid_config("hours_per_day", "must be positive"));
        }
        let within_limit = self
            .days
            .checked_mul(self.hours_per_day)
            .is_some_and(|total| total <= MAX_POINTS);
        if !within_limit {
            return Err(SeriesError::invalid_config(
                "days",
                format!(
                    "{} days of {} samples exceeds the limit of {} points",
                    self.days, self.hours_per_day, MAX_POINTS
                ),
            ));
        }
        if !(self.period.is_finite() && self.period > 0.0) {
            return Err(SeriesError::invalid_config("period", "must be a positive number"));
        }
        if !(self.noise_std.is_finite() && self.noise_std >= 0.0) {
            return Err(SeriesError::invalid_config(
                "noise_std",
                "must be a non-negative number",
            ));
        }
        for (name, value) in [
            ("base_level", self.base_level),
            ("amplitude", self.amplitude),
            ("slope", self.slope),
        ] {
            if !value.is_finite() {
                return Err(SeriesError::invalid_config(name, "must be finite"));
            }
        }
        if !self.anomaly_indices.is_empty() && self.anomaly_magnitudes.is_empty() {
            return Err(SeriesError::invalid_config(
                "anomaly_magnitudes",
                "at least one magnitude is required when anomaly indices are set",
            ));
        }
        if self.anomaly_magnitudes.iter().any(|m| !m.is_finite()) {
            return Err(SeriesError::invalid_config("anomaly_magnitudes", "must be finite"));
        }
        let total = self.total_points();
        if let Some(&idx) = self.anomaly_indices.iter().find(|&&idx| idx >= total) {
            return Err(SeriesError::invalid_config(
                "anomaly_indices",
                format!("index {} is outside [0, {})", idx, total),
            ));
        }
        Ok(())
    }
}

/// Builder for [`GeneratorConfig`].
#[derive(Debug, Default)]
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    /// Create a builder starting from the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn days(mut self, days: usize) -> Self {
        self.config.days = days;
        self
    }

    pub fn hours_per_day(mut self, hours_per_day: usize) -> Self {
        self.config.hours_per_day = hours_per_day;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Set the deterministic part of the signal.
    pub fn signal(mut self, base_level: f64, amplitude: f64, period: f64, slope: f64) -> Self {
        self.config.base_level = base_level;
        self.config.amplitude = amplitude;
        self.config.period = period;
        self.config.slope = slope;
        self
    }

    pub fn noise_std(mut self, noise_std: f64) -> Self {
        self.config.noise_std = noise_std;
        self
    }

    /// Set where anomalies are injected and the offsets they draw from.
    pub fn anomalies(mut self, indices: Vec<usize>, magnitudes: Vec<f64>) -> Self {
        self.config.anomaly_indices = indices;
        self.config.anomaly_magnitudes = magnitudes;
        self
    }

    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.config.start = start;
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<GeneratorConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_run() {
        let config = GeneratorConfig::default();
        assert_eq!(config.total_points(), 720);
        assert_eq!(config.seed, 42);
        assert_eq!(config.anomaly_indices, vec![50, 120, 300, 550, 680]);
        assert_eq!(config.anomaly_magnitudes, vec![30.0, -25.0]);
        assert_eq!(config.start.to_string(), "2024-01-01 00:00:00");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = GeneratorConfigBuilder::new()
            .days(2)
            .hours_per_day(12)
            .seed(7)
            .anomalies(vec![3], vec![10.0])
            .build()
            .unwrap();
        assert_eq!(config.total_points(), 24);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn test_zero_days_rejected() {
        let result = GeneratorConfigBuilder::new().days(0).build();
        assert!(matches!(
            result,
            Err(SeriesError::InvalidConfig { ref name, .. }) if name == "days"
        ));
    }

    #[test]
    fn test_overflowing_shape_rejected() {
        let result = GeneratorConfigBuilder::new().days(usize::MAX).build();
        assert!(matches!(
            result,
            Err(SeriesError::InvalidConfig { ref name, .. }) if name == "days"
        ));

        let result = GeneratorConfigBuilder::new()
            .days(usize::MAX / 2)
            .hours_per_day(3)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_shape_above_point_limit_rejected() {
        let result = GeneratorConfigBuilder::new()
            .days(MAX_POINTS / 24 + 1)
            .hours_per_day(24)
            .build();
        match result {
            Err(SeriesError::InvalidConfig { name, reason }) => {
                assert_eq!(name, "days");
                assert!(reason.contains("exceeds"));
            }
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_total_points_saturates() {
        let config = GeneratorConfig {
            days: usize::MAX,
            ..GeneratorConfig::default()
        };
        assert_eq!(config.total_points(), usize::MAX);
    }

    #[test]
    fn test_zero_hours_rejected() {
        let result = GeneratorConfigBuilder::new().hours_per_day(0).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_out_of_range_anomaly_index_rejected() {
        let result = GeneratorConfigBuilder::new()
            .days(1)
            .hours_per_day(24)
            .anomalies(vec![5, 24], vec![30.0])
            .build();
        match result {
            Err(SeriesError::InvalidConfig { name, reason }) => {
                assert_eq!(name, "anomaly_indices");
                assert!(reason.contains("24"));
            }
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_indices_without_magnitudes_rejected() {
        let result = GeneratorConfigBuilder::new()
            .anomalies(vec![1], Vec::new())
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_no_anomalies_is_valid() {
        let result = GeneratorConfigBuilder::new()
            .anomalies(Vec::new(), Vec::new())
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_negative_noise_rejected() {
        let result = GeneratorConfigBuilder::new().noise_std(-1.0).build();
        assert!(result.is_err());
    }
}

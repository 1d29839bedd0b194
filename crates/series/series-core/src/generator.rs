//! Synthetic CPU utilization generator.

use std::f64::consts::PI;

use series_api::GeneratorConfig;
use series_spi::{RandomSource, Result, SeriesGenerator, TimeSeries};
use tracing::{debug, info};

use crate::random::SeededRandom;

/// Lowest valid utilization.
const MIN_PERCENT: f64 = 0.0;
/// Highest valid utilization.
const MAX_PERCENT: f64 = 100.0;

/// Daily-seasonal CPU signal with trend, Gaussian noise and injected anomalies.
#[derive(Debug, Clone)]
pub struct SyntheticGenerator {
    config: GeneratorConfig,
}

impl SyntheticGenerator {
    /// Create a generator, validating the configuration up front.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate using a [`SeededRandom`] seeded from the configuration.
    pub fn generate_seeded(&self) -> Result<TimeSeries> {
        let mut random = SeededRandom::new(self.config.seed);
        self.generate(&mut random)
    }

    /// Noise-free signal value at step `t`.
    fn base_signal(&self, t: usize) -> f64 {
        let c = &self.config;
        let t = t as f64;
        c.base_level + c.amplitude * (2.0 * PI * t / c.period).sin() + c.slope * t
    }
}

impl SeriesGenerator for SyntheticGenerator {
    fn generate(&self, random: &mut dyn RandomSource) -> Result<TimeSeries> {
        let c = &self.config;
        let n = c.total_points();

        // All noise is drawn before any anomaly choice.
        let mut values: Vec<f64> = (0..n)
            .map(|t| self.base_signal(t) + random.gaussian(0.0, c.noise_std))
            .collect();

        for &idx in &c.anomaly_indices {
            let magnitude = c.anomaly_magnitudes[random.choose_index(c.anomaly_magnitudes.len())];
            debug!(index = idx, magnitude, "injecting anomaly");
            values[idx] += magnitude;
        }

        for value in values.iter_mut() {
            *value = value.clamp(MIN_PERCENT, MAX_PERCENT);
        }

        info!(
            points = n,
            anomalies = c.anomaly_indices.len(),
            seed = c.seed,
            "generated synthetic series"
        );
        Ok(TimeSeries::hourly(c.start, &values))
    }

    fn len(&self) -> usize {
        self.config.total_points()
    }
}

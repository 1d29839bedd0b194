//! Dynamic threshold derived from residual statistics.

use serde::{Deserialize, Serialize};

/// Symmetric band `mean ± multiplier * std_dev` around the residual mean.
///
/// Built once per run from the whole residual population.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdBounds {
    /// Residual mean
    pub mean: f64,
    /// Residual standard deviation
    pub std_dev: f64,
    /// Sigma multiplier `k`
    pub multiplier: f64,
    /// `mean + k * std_dev`
    pub upper: f64,
    /// `mean - k * std_dev`
    pub lower: f64,
}

impl ThresholdBounds {
    /// Derive the band from residual statistics.
    pub fn new(mean: f64, std_dev: f64, multiplier: f64) -> Self {
        let half_width = multiplier * std_dev;
        Self {
            mean,
            std_dev,
            multiplier,
            upper: mean + half_width,
            lower: mean - half_width,
        }
    }

    /// Whether `residual` falls strictly outside the band.
    pub fn is_outside(&self, residual: f64) -> bool {
        residual > self.upper || residual < self.lower
    }

    /// Nominal band width `2 * k * std_dev`.
    pub fn width(&self) -> f64 {
        2.0 * self.multiplier * self.std_dev
    }
}

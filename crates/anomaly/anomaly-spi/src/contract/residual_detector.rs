//! Residual detector trait definition.

use crate::error::Result;
use crate::model::ResidualAnalysis;

/// Turns aligned (observed, predicted) pairs into anomaly flags.
///
/// Implementations are pure: analysing the same input twice yields the same
/// residuals, bounds and flags.
pub trait ResidualDetector {
    /// Residuals `observed[i] - predicted[i]`.
    fn residuals(&self, observed: &[f64], predicted: &[f64]) -> Result<Vec<f64>>;

    /// Residuals, threshold bounds and per-index flags.
    fn analyze(&self, observed: &[f64], predicted: &[f64]) -> Result<ResidualAnalysis>;
}

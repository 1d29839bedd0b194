//! Fit statistics reported by a fitted model.

use serde::{Deserialize, Serialize};

/// Goodness-of-fit statistics of a fitted model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    /// Conditional Gaussian log-likelihood
    pub log_likelihood: f64,
    /// Akaike information criterion
    pub aic: f64,
    /// Innovation variance estimate
    pub sigma2: f64,
    /// Number of estimated parameters (including the variance)
    pub n_params: usize,
    /// Number of residuals the likelihood was evaluated on
    pub n_residuals: usize,
}

//! Fitted model trait definition.

use std::ops::Range;

use crate::error::Result;
use crate::model::{ArimaOrder, ModelSummary};

/// A model that has been fitted and no longer changes.
pub trait FittedModel {
    /// Order the model was fitted with.
    fn order(&self) -> ArimaOrder;

    /// Number of observations the model was trained on.
    fn n_obs(&self) -> usize;

    /// One-step-ahead in-sample predictions for every index in `range`.
    ///
    /// The range must lie within the training span `0..n_obs()`; this is not
    /// an out-of-sample forecast.
    fn predict_in_sample(&self, range: Range<usize>) -> Result<Vec<f64>>;

    /// Goodness-of-fit statistics.
    fn summary(&self) -> ModelSummary;

    /// In-sample predictions for the whole training span.
    fn fitted_values(&self) -> Result<Vec<f64>> {
        self.predict_in_sample(0..self.n_obs())
    }
}

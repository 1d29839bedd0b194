//! Forecaster trait definition.

use crate::contract::FittedModel;
use crate::error::Result;
use crate::model::ArimaOrder;

/// Fits a model of a fixed order to a numeric series.
///
/// Any numerical backend can sit behind this trait; consumers only ever see
/// the resulting [`FittedModel`].
pub trait Forecaster {
    /// Model type produced by [`fit`](Self::fit).
    type Model: FittedModel;

    /// Fit a model to `series`.
    ///
    /// Degenerate input (constant series, too few points for the order,
    /// numerically non-invertible systems) is an error, never a silent
    /// fallback.
    fn fit(&self, series: &[f64], order: ArimaOrder) -> Result<Self::Model>;
}

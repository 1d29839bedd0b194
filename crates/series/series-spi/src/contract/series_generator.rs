//! Series generator trait definition.

use crate::contract::RandomSource;
use crate::error::Result;
use crate::model::TimeSeries;

/// Produces a complete time series in one batch.
pub trait SeriesGenerator {
    /// Generate a series, drawing all randomness from `random`.
    fn generate(&self, random: &mut dyn RandomSource) -> Result<TimeSeries>;

    /// Number of points the generator will produce.
    fn len(&self) -> usize;

    /// Whether the generator produces an empty series.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

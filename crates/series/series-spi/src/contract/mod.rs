//! Contract definitions for series generation.
//!
//! This module contains trait definitions that providers must implement.

mod random_source;
mod series_generator;

pub use random_source::RandomSource;
pub use series_generator::SeriesGenerator;

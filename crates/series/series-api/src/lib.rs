//! Series API
//!
//! Configuration types and builders for synthetic series generation.

mod config;

pub use config::{GeneratorConfig, GeneratorConfigBuilder, MAX_POINTS};

// Re-export SPI types
pub use series_spi::{Observation, RandomSource, Result, SeriesError, SeriesGenerator, TimeSeries};

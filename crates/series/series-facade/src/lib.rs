//! Series Facade
//!
//! Unified re-exports for the series module:
//! - `TimeSeries`, `Observation`, `RandomSource` and `SeriesError` from SPI
//! - `GeneratorConfig` and its builder from API
//! - `SyntheticGenerator`, random sources and CSV I/O from Core
//!
//! # Example
//!
//! ```rust
//! use series_facade::{GeneratorConfig, SeriesGenerator, SeededRandom, SyntheticGenerator};
//!
//! let generator = SyntheticGenerator::new(GeneratorConfig::default()).unwrap();
//! let series = generator.generate(&mut SeededRandom::new(42)).unwrap();
//! assert_eq!(series.len(), 720);
//! ```

// Re-export everything from SPI
pub use series_spi::*;

// Re-export everything from API
pub use series_api::*;

// Re-export everything from Core
pub use series_core::*;

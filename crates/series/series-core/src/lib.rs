//! Series Core
//!
//! Implementations for series generation and persistence:
//!
//! - [`generator`]: seasonal + trend + noise signal with injected anomalies
//! - [`random`]: seeded and scripted [`RandomSource`](series_spi::RandomSource)s
//! - [`csv_io`]: `timestamp,cpu_percent` CSV reader and writer

pub mod csv_io;
pub mod generator;
pub mod random;

pub use csv_io::{read_series_csv, write_series_csv};
pub use generator::SyntheticGenerator;
pub use random::{ScriptedRandom, SeededRandom};

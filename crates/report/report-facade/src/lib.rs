//! Report Facade
//!
//! Unified re-exports for the report sinks.

// Re-export everything from SPI
pub use report_spi::*;

// Re-export everything from Core
pub use report_core::*;

//! Forecast Consumer API
//!
//! Configuration types and builders for ARIMA estimation.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use forecast_spi::{ArimaOrder, FittedModel, ForecastError, Forecaster, ModelSummary, Result};

/// Estimation settings for the ARIMA backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArimaConfig {
    /// Include a constant term. `None` includes one only when `d == 0`.
    pub include_constant: Option<bool>,
    /// Order of the long autoregression used to estimate innovations when
    /// `q > 0`. `None` picks one from the series length.
    pub long_ar_order: Option<usize>,
}

impl ArimaConfig {
    /// Whether a model of `order` gets a constant term.
    pub fn constant_for(&self, order: ArimaOrder) -> bool {
        self.include_constant.unwrap_or(order.d() == 0)
    }
}

/// Builder for [`ArimaConfig`].
#[derive(Debug, Default)]
pub struct ArimaConfigBuilder {
    config: ArimaConfig,
}

impl ArimaConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the constant term on or off.
    pub fn include_constant(mut self, include: bool) -> Self {
        self.config.include_constant = Some(include);
        self
    }

    /// Fix the long autoregression order used for MA estimation.
    pub fn long_ar_order(mut self, order: usize) -> Self {
        self.config.long_ar_order = Some(order);
        self
    }

    pub fn build(self) -> Result<ArimaConfig> {
        if self.config.long_ar_order == Some(0) {
            return Err(ForecastError::InvalidParameter {
                name: "long_ar_order".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_follows_differencing_by_default() {
        let config = ArimaConfig::default();
        assert!(config.constant_for(ArimaOrder::new(2, 0, 0).unwrap()));
        assert!(!config.constant_for(ArimaOrder::new(2, 1, 0).unwrap()));
    }

    #[test]
    fn test_builder_forces_constant() {
        let config = ArimaConfigBuilder::new().include_constant(true).build().unwrap();
        assert!(config.constant_for(ArimaOrder::default()));
    }

    #[test]
    fn test_builder_rejects_zero_long_order() {
        assert!(ArimaConfigBuilder::new().long_ar_order(0).build().is_err());
    }
}

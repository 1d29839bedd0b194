//! ARIMA (p, d, q) order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};

/// Largest supported autoregressive order.
pub const MAX_AR_ORDER: usize = 10;
/// Largest supported differencing order.
pub const MAX_DIFF_ORDER: usize = 2;
/// Largest supported moving-average order.
pub const MAX_MA_ORDER: usize = 10;

/// Order triple of an ARIMA model.
///
/// Serialized as a `[p, d, q]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[usize; 3]", into = "[usize; 3]")]
pub struct ArimaOrder {
    p: usize,
    d: usize,
    q: usize,
}

impl ArimaOrder {
    /// Create a validated order.
    ///
    /// * `p` - autoregressive order (0-10)
    /// * `d` - differencing order (0-2)
    /// * `q` - moving-average order (0-10)
    pub fn new(p: usize, d: usize, q: usize) -> Result<Self> {
        if p > MAX_AR_ORDER {
            return Err(ForecastError::InvalidParameter {
                name: "p".to_string(),
                reason: format!("AR order must be <= {}", MAX_AR_ORDER),
            });
        }
        if d > MAX_DIFF_ORDER {
            return Err(ForecastError::InvalidParameter {
                name: "d".to_string(),
                reason: format!("Differencing order must be <= {}", MAX_DIFF_ORDER),
            });
        }
        if q > MAX_MA_ORDER {
            return Err(ForecastError::InvalidParameter {
                name: "q".to_string(),
                reason: format!("MA order must be <= {}", MAX_MA_ORDER),
            });
        }
        Ok(Self { p, d, q })
    }

    pub fn p(&self) -> usize {
        self.p
    }

    pub fn d(&self) -> usize {
        self.d
    }

    pub fn q(&self) -> usize {
        self.q
    }

    /// Minimum series length accepted for this order.
    pub fn min_observations(&self) -> usize {
        self.p + self.d + self.q + 10
    }
}

impl Default for ArimaOrder {
    /// ARIMA(5, 1, 0), the order tuned for the hourly CPU pattern.
    fn default() -> Self {
        Self { p: 5, d: 1, q: 0 }
    }
}

impl fmt::Display for ArimaOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.p, self.d, self.q)
    }
}

impl TryFrom<[usize; 3]> for ArimaOrder {
    type Error = ForecastError;

    fn try_from([p, d, q]: [usize; 3]) -> Result<Self> {
        Self::new(p, d, q)
    }
}

impl From<ArimaOrder> for [usize; 3] {
    fn from(order: ArimaOrder) -> Self {
        [order.p, order.d, order.q]
    }
}

impl FromStr for ArimaOrder {
    type Err = ForecastError;

    /// Parse `p,d,q`, optionally wrapped in parentheses.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let parts: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ForecastError::InvalidParameter {
                name: "order".to_string(),
                reason: format!("expected 'p,d,q', got '{}'", s),
            });
        }
        let mut values = [0usize; 3];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| ForecastError::InvalidParameter {
                name: "order".to_string(),
                reason: format!("'{}' is not a non-negative integer", part),
            })?;
        }
        Self::try_from(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_order() {
        let order = ArimaOrder::new(5, 1, 0).unwrap();
        assert_eq!((order.p(), order.d(), order.q()), (5, 1, 0));
        assert_eq!(order.min_observations(), 16);
    }

    #[test]
    fn test_order_limits() {
        assert!(ArimaOrder::new(11, 0, 0).is_err());
        assert!(ArimaOrder::new(0, 3, 0).is_err());
        assert!(ArimaOrder::new(0, 0, 11).is_err());
        assert!(ArimaOrder::new(10, 2, 10).is_ok());
    }

    #[test]
    fn test_default_order() {
        assert_eq!(ArimaOrder::default(), ArimaOrder::new(5, 1, 0).unwrap());
    }

    #[test]
    fn test_display() {
        assert_eq!(ArimaOrder::new(2, 1, 1).unwrap().to_string(), "(2, 1, 1)");
    }

    #[test]
    fn test_parse() {
        assert_eq!("5,1,0".parse::<ArimaOrder>().unwrap(), ArimaOrder::default());
        assert_eq!(
            "(2, 0, 1)".parse::<ArimaOrder>().unwrap(),
            ArimaOrder::new(2, 0, 1).unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("5,1".parse::<ArimaOrder>().is_err());
        assert!("a,b,c".parse::<ArimaOrder>().is_err());
        assert!("-1,0,0".parse::<ArimaOrder>().is_err());
        assert!("1,5,0".parse::<ArimaOrder>().is_err());
    }
}

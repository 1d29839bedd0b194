//! Forecast error types

use thiserror::Error;

/// Result type alias for forecasting operations
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur while fitting or querying a model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Insufficient data points for the requested order
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Input contains NaN or infinite values
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Series carries no variation the model could learn from
    #[error("Degenerate series: {0}")]
    DegenerateSeries(String),

    /// Estimation equations are singular or produced non-finite coefficients
    #[error("Non-invertible system: {0}")]
    NonInvertible(String),

    /// Prediction range falls outside the training span
    #[error("Prediction range {start}..{end} outside training span 0..{len}")]
    InvalidRange { start: usize, end: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_error_message() {
        let error = ForecastError::InsufficientData {
            required: 16,
            actual: 4,
        };
        assert_eq!(
            error.to_string(),
            "Insufficient data: need at least 16 points, got 4"
        );
    }

    #[test]
    fn test_invalid_parameter_message() {
        let error = ForecastError::InvalidParameter {
            name: "p".to_string(),
            reason: "AR order must be <= 10".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid parameter 'p': AR order must be <= 10");
    }

    #[test]
    fn test_degenerate_series_message() {
        let error = ForecastError::DegenerateSeries("series is constant".to_string());
        assert_eq!(error.to_string(), "Degenerate series: series is constant");
    }

    #[test]
    fn test_invalid_range_message() {
        let error = ForecastError::InvalidRange {
            start: 0,
            end: 800,
            len: 720,
        };
        assert_eq!(
            error.to_string(),
            "Prediction range 0..800 outside training span 0..720"
        );
    }

    #[test]
    fn test_error_is_clone_and_eq() {
        let error = ForecastError::NonInvertible("zero pivot".to_string());
        assert_eq!(error.clone(), error);
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn std::error::Error + Send + Sync> =
            Box::new(ForecastError::InvalidData("NaN".to_string()));
        assert!(!error.to_string().is_empty());
    }
}

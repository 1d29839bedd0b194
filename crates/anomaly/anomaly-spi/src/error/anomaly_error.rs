//! Anomaly detection error types.

use thiserror::Error;

/// Anomaly detection errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnomalyError {
    #[error("Length mismatch: {observed} observed values, {predicted} predicted values")]
    LengthMismatch { observed: usize, predicted: usize },

    #[error("Empty input: at least one residual is required")]
    EmptyInput,

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for anomaly detection operations.
pub type Result<T> = std::result::Result<T, AnomalyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_display() {
        let error = AnomalyError::LengthMismatch {
            observed: 720,
            predicted: 719,
        };
        assert_eq!(
            error.to_string(),
            "Length mismatch: 720 observed values, 719 predicted values"
        );
    }

    #[test]
    fn test_empty_input_display() {
        assert_eq!(
            AnomalyError::EmptyInput.to_string(),
            "Empty input: at least one residual is required"
        );
    }

    #[test]
    fn test_invalid_parameter_display() {
        let error = AnomalyError::InvalidParameter {
            name: "threshold".to_string(),
            reason: "must be non-negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid parameter: threshold - must be non-negative"
        );
    }

    #[test]
    fn test_invalid_data_display() {
        let error = AnomalyError::InvalidData("predicted[3] is NaN".to_string());
        assert_eq!(error.to_string(), "Invalid data: predicted[3] is NaN");
    }

    #[test]
    fn test_error_is_debug() {
        let debug_str = format!("{:?}", AnomalyError::EmptyInput);
        assert!(debug_str.contains("EmptyInput"));
    }

    #[test]
    fn test_all_error_variants_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnomalyError>();
    }
}

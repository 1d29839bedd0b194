//! Pipeline errors, one variant per failing stage.

use std::error::Error as StdError;
use std::path::{Path, PathBuf};

use anomaly_facade::AnomalyError;
use forecast_facade::ForecastError;
use report_facade::ReportError;
use series_facade::SeriesError;
use thiserror::Error;

/// Any failure that aborts the pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("ConfigError: {0}")]
    Config(String),

    #[error("GenerationError: {0}")]
    Generation(#[source] SeriesError),

    #[error("IOError: {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("ModelFitError: {0}")]
    ModelFit(#[from] ForecastError),

    #[error("DetectionError: {0}")]
    Detection(#[from] AnomalyError),

    #[error("ReportError: {0}")]
    Report(#[source] ReportError),
}

/// Result type for pipeline stages.
pub type Result<T> = std::result::Result<T, PipelineError>;

impl PipelineError {
    pub fn io(path: impl Into<PathBuf>, source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self::Io {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Map a failure reading or writing the data CSV at `path`.
    pub fn data_file(path: &Path, err: SeriesError) -> Self {
        match err {
            SeriesError::Io { path, source } => Self::io(path, source),
            SeriesError::Csv { path, message } => Self::io(path, message),
            other => Self::io(path, other),
        }
    }

    /// Name of the stage that failed.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Generation(_) => "generation",
            Self::Io { .. } => "io",
            Self::ModelFit(_) => "model_fit",
            Self::Detection(_) => "detection",
            Self::Report(_) => "report",
        }
    }
}

impl From<ReportError> for PipelineError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::Io { path, source } => Self::io(path, source),
            other => Self::Report(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_model_fit_display_names_stage() {
        let err = PipelineError::from(ForecastError::InsufficientData {
            required: 16,
            actual: 4,
        });
        assert!(err.to_string().starts_with("ModelFitError: "));
        assert_eq!(err.stage(), "model_fit");
    }

    #[test]
    fn test_series_io_keeps_failing_path() {
        let err = PipelineError::data_file(
            Path::new("fallback.csv"),
            SeriesError::Io {
                path: PathBuf::from("data/cpu_data.csv"),
                source: io::Error::new(io::ErrorKind::NotFound, "missing"),
            },
        );
        assert_eq!(err.to_string(), "IOError: data/cpu_data.csv: missing");
    }

    #[test]
    fn test_parse_failure_uses_input_path() {
        let err = PipelineError::data_file(
            Path::new("in.csv"),
            SeriesError::ParseError {
                row: 3,
                reason: "bad".to_string(),
            },
        );
        assert_eq!(err.to_string(), "IOError: in.csv: Parse error at row 3: bad");
    }

    #[test]
    fn test_report_io_becomes_io_stage() {
        let err = PipelineError::from(ReportError::Io {
            path: PathBuf::from("outputs/anomaly_report.csv"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        });
        assert_eq!(err.stage(), "io");

        let err = PipelineError::from(ReportError::EmptyInput("nothing".to_string()));
        assert_eq!(err.stage(), "report");
    }
}

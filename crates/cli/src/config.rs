//! Pipeline configuration.
//!
//! Resolved once at startup from defaults, an optional JSON file and command
//! line flags (in increasing precedence), then passed to every stage by
//! reference.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anomaly_facade::{ResidualConfig, StdDevKind, DEFAULT_THRESHOLD};
use anyhow::Context;
use forecast_facade::{ArimaConfig, ArimaOrder};
use serde::{Deserialize, Serialize};
use series_facade::GeneratorConfig;

use crate::error::{PipelineError, Result};

/// Everything a pipeline run needs to know.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Where the generated series is saved
    pub data_path: PathBuf,
    /// Where the detection chart is rendered
    pub plot_path: PathBuf,
    /// Where the anomalous rows are written
    pub report_path: PathBuf,
    /// Sigma multiplier of the dynamic threshold
    pub anomaly_threshold: f64,
    pub arima_order: ArimaOrder,
    pub std_dev_kind: StdDevKind,
    /// Series length, seed and signal shape
    #[serde(flatten)]
    pub generator: GeneratorConfig,
    pub arima: ArimaConfig,
    /// Keys no field claimed; any entry here is a configuration error
    #[serde(flatten, skip_serializing)]
    unknown: BTreeMap<String, serde_json::Value>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/cpu_data.csv"),
            plot_path: PathBuf::from("outputs/detection_plot.png"),
            report_path: PathBuf::from("outputs/anomaly_report.csv"),
            anomaly_threshold: DEFAULT_THRESHOLD,
            arima_order: ArimaOrder::default(),
            std_dev_kind: StdDevKind::Sample,
            generator: GeneratorConfig::default(),
            arima: ArimaConfig::default(),
            unknown: BTreeMap::new(),
        }
    }
}

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub days: Option<usize>,
    pub hours_per_day: Option<usize>,
    pub threshold: Option<f64>,
    pub order: Option<ArimaOrder>,
    pub seed: Option<u64>,
    pub data_path: Option<PathBuf>,
    pub plot_path: Option<PathBuf>,
    pub report_path: Option<PathBuf>,
    pub population_std: bool,
}

impl PipelineConfig {
    /// Read a JSON configuration file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Build the run configuration from an optional file plus flag overrides.
    pub fn resolve(file: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
        let base = match file {
            Some(path) => {
                Self::from_file(path).map_err(|e| PipelineError::Config(format!("{:#}", e)))?
            }
            None => Self::default(),
        };
        let config = base.with_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Apply explicit flags on top of `self`.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(days) = overrides.days {
            self.generator.days = days;
        }
        if let Some(hours) = overrides.hours_per_day {
            self.generator.hours_per_day = hours;
        }
        if let Some(threshold) = overrides.threshold {
            self.anomaly_threshold = threshold;
        }
        if let Some(order) = overrides.order {
            self.arima_order = order;
        }
        if let Some(seed) = overrides.seed {
            self.generator.seed = seed;
        }
        if let Some(path) = &overrides.data_path {
            self.data_path = path.clone();
        }
        if let Some(path) = &overrides.plot_path {
            self.plot_path = path.clone();
        }
        if let Some(path) = &overrides.report_path {
            self.report_path = path.clone();
        }
        if overrides.population_std {
            self.std_dev_kind = StdDevKind::Population;
        }
        self
    }

    /// Reject unusable values before any stage runs.
    pub fn validate(&self) -> Result<()> {
        if !self.unknown.is_empty() {
            let keys: Vec<&str> = self.unknown.keys().map(String::as_str).collect();
            return Err(PipelineError::Config(format!(
                "unknown configuration key(s): {}",
                keys.join(", ")
            )));
        }
        self.generator
            .validate()
            .map_err(|e| PipelineError::Config(e.to_string()))?;
        self.residual_config()
            .validate()
            .map_err(|e| PipelineError::Config(e.to_string()))?;
        if self.arima.long_ar_order == Some(0) {
            return Err(PipelineError::Config(
                "arima.long_ar_order must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn residual_config(&self) -> ResidualConfig {
        ResidualConfig::new(self.anomaly_threshold, self.std_dev_kind)
    }

    /// Folder holding the chart, shown in the closing message.
    pub fn output_dir(&self) -> &Path {
        self.plot_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }
}

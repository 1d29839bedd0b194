//! Stage driver: generate or load, fit, detect, report.

use std::fs;
use std::path::Path;

use anomaly_facade::{AnnotatedSeries, ResidualAnalyzer};
use forecast_facade::prelude::*;
use forecast_facade::ModelSummary;
use report_facade::{CsvReportWriter, PlotRenderer, ReportKind, ReportSink, ReportSummary};
use series_facade::{read_series_csv, write_series_csv, SyntheticGenerator, TimeSeries};
use tracing::{debug, info};

use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};

const TOTAL_STEPS: usize = 5;

/// Result of a completed run.
#[derive(Debug)]
pub struct PipelineOutcome {
    pub annotated: AnnotatedSeries,
    pub model: ModelSummary,
    pub reports: Vec<ReportSummary>,
}

/// Runs the stages against one resolved configuration.
pub struct Pipeline<'a> {
    config: &'a PipelineConfig,
    sinks: Vec<Box<dyn ReportSink>>,
}

impl<'a> Pipeline<'a> {
    /// Pipeline writing the chart and the CSV report.
    pub fn new(config: &'a PipelineConfig) -> Self {
        Self {
            config,
            sinks: vec![
                Box::new(PlotRenderer::new(&config.plot_path)) as Box<dyn ReportSink>,
                Box::new(CsvReportWriter::new(&config.report_path)),
            ],
        }
    }

    /// Pipeline with a custom set of report sinks.
    pub fn with_sinks(config: &'a PipelineConfig, sinks: Vec<Box<dyn ReportSink>>) -> Self {
        Self { config, sinks }
    }

    /// Generate, persist and analyze a synthetic series.
    pub fn run(&self) -> Result<PipelineOutcome> {
        let series = self.generate()?;
        self.analyze(&series)
    }

    /// Load `input` and analyze it.
    pub fn run_on_file(&self, input: &Path) -> Result<PipelineOutcome> {
        let series = self.load(input)?;
        self.analyze(&series)
    }

    /// Stage 1: synthesize the CPU series and save it to the data path.
    pub fn generate(&self) -> Result<TimeSeries> {
        step(1, "Generating synthetic CPU dataset...");
        let generator =
            SyntheticGenerator::new(self.config.generator.clone()).map_err(PipelineError::Generation)?;
        let series = generator.generate_seeded().map_err(PipelineError::Generation)?;

        let path = &self.config.data_path;
        ensure_parent(path)?;
        write_series_csv(&series, path).map_err(|e| PipelineError::data_file(path, e))?;
        detail(format!("Data saved to {}", path.display()));
        Ok(series)
    }

    /// Stage 1 (alternative): read an existing `timestamp,cpu_percent` file.
    pub fn load(&self, input: &Path) -> Result<TimeSeries> {
        step(1, &format!("Loading CPU dataset from {}...", input.display()));
        let series = read_series_csv(input).map_err(|e| PipelineError::data_file(input, e))?;
        detail(format!("Loaded {} observations", series.len()));
        Ok(series)
    }

    /// Stages 2 to 5 on an already available series.
    pub fn analyze(&self, series: &TimeSeries) -> Result<PipelineOutcome> {
        let (predicted, model) = self.fit(series)?;
        let annotated = self.detect(series, &predicted)?;
        let reports = self.report(&annotated)?;
        Ok(PipelineOutcome {
            annotated,
            model,
            reports,
        })
    }

    /// Stage 2: fit the configured ARIMA order and predict in sample.
    pub fn fit(&self, series: &TimeSeries) -> Result<(Vec<f64>, ModelSummary)> {
        let order = self.config.arima_order;
        step(2, &format!("Training ARIMA{} model...", order));

        let estimator = ArimaEstimator::new(self.config.arima.clone());
        let model = estimator.fit(&series.values(), order)?;
        let predicted = model.fitted_values()?;
        let summary = model.summary();

        info!(%order, aic = summary.aic, sigma2 = summary.sigma2, "model fitted");
        detail(format!("Model AIC: {:.2}", summary.aic));
        Ok((predicted, summary))
    }

    /// Stage 3: classify residuals against the dynamic threshold.
    pub fn detect(&self, series: &TimeSeries, predicted: &[f64]) -> Result<AnnotatedSeries> {
        step(3, "Calculating residuals and detecting anomalies...");
        let analyzer = ResidualAnalyzer::from_config(self.config.residual_config())?;
        let annotated = analyzer.annotate(series, predicted)?;

        let bounds = annotated.bounds();
        debug!(upper = bounds.upper, lower = bounds.lower, "threshold bounds");
        detail(format!(
            "Detected {} anomalies (Threshold: {}σ)",
            annotated.anomaly_count(),
            self.config.anomaly_threshold
        ));
        Ok(annotated)
    }

    /// Stages 4 and 5: hand the annotated records to every sink in order.
    pub fn report(&self, annotated: &AnnotatedSeries) -> Result<Vec<ReportSummary>> {
        let mut summaries = Vec::with_capacity(self.sinks.len());
        for (offset, sink) in self.sinks.iter().enumerate() {
            let number = (4 + offset).min(TOTAL_STEPS);
            let (title, label) = match sink.kind() {
                ReportKind::Plot => ("Generating visualization...", "Plot"),
                ReportKind::Csv => ("Saving anomaly report...", "Report"),
            };
            step(number, title);
            let summary = sink.emit(annotated.records(), annotated.bounds())?;
            detail(format!("{} saved to {}", label, summary.path.display()));
            summaries.push(summary);
        }
        Ok(summaries)
    }
}

/// Create the parent directory of an output file.
pub fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            fs::create_dir_all(dir).map_err(|e| PipelineError::io(dir, e))
        }
        _ => Ok(()),
    }
}

fn step(number: usize, message: &str) {
    println!("[{}/{}] {}", number, TOTAL_STEPS, message);
}

fn detail(message: String) {
    println!("      {}", message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigOverrides;
    use std::path::PathBuf;

    fn config_in(dir: &Path) -> PipelineConfig {
        let overrides = ConfigOverrides {
            data_path: Some(dir.join("data").join("cpu_data.csv")),
            plot_path: Some(dir.join("outputs").join("detection_plot.png")),
            report_path: Some(dir.join("outputs").join("anomaly_report.csv")),
            ..Default::default()
        };
        PipelineConfig::resolve(None, &overrides).unwrap()
    }

    fn csv_only(config: &PipelineConfig) -> Pipeline<'_> {
        ensure_parent(&config.report_path).unwrap();
        Pipeline::with_sinks(
            config,
            vec![Box::new(CsvReportWriter::new(&config.report_path)) as Box<dyn ReportSink>],
        )
    }

    #[test]
    fn test_default_run_flags_injected_anomalies() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let outcome = csv_only(&config).run().unwrap();

        assert!(config.data_path.exists());
        assert_eq!(outcome.annotated.len(), 720);
        assert!(outcome.model.aic.is_finite());

        let flagged: Vec<usize> = outcome
            .annotated
            .records()
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_anomaly)
            .map(|(i, _)| i)
            .collect();
        let hits = [50, 120, 300, 550, 680]
            .iter()
            .filter(|i| flagged.contains(i))
            .count();
        assert!(hits >= 4, "only {} injected anomalies flagged: {:?}", hits, flagged);

        assert_eq!(outcome.reports.len(), 1);
        assert_eq!(outcome.reports[0].anomalies, outcome.annotated.anomaly_count());
        let report = fs::read_to_string(&config.report_path).unwrap();
        assert_eq!(report.lines().count(), outcome.annotated.anomaly_count() + 1);
    }

    #[test]
    fn test_default_sinks_write_plot_and_same_report() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        ensure_parent(&config.plot_path).unwrap();

        let csv_outcome = csv_only(&config).run().unwrap();
        let csv_report = fs::read_to_string(&config.report_path).unwrap();
        fs::remove_file(&config.report_path).unwrap();

        let outcome = Pipeline::new(&config).run().unwrap();
        let report = fs::read_to_string(&config.report_path).unwrap();

        let kinds: Vec<ReportKind> = outcome.reports.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![ReportKind::Plot, ReportKind::Csv]);
        assert!(config.plot_path.exists());
        assert_eq!(outcome.reports[0].anomalies, outcome.annotated.anomaly_count());
        assert_eq!(outcome.annotated, csv_outcome.annotated);
        assert_eq!(report, csv_report);
    }

    #[test]
    fn test_run_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let first = csv_only(&config).run().unwrap();
        let first_report = fs::read_to_string(&config.report_path).unwrap();
        let second = csv_only(&config).run().unwrap();
        let second_report = fs::read_to_string(&config.report_path).unwrap();

        assert_eq!(first.annotated, second.annotated);
        assert_eq!(first_report, second_report);
    }

    #[test]
    fn test_detect_on_saved_file_matches_run() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let pipeline = csv_only(&config);

        let generated = pipeline.run().unwrap();
        let reloaded = pipeline.run_on_file(&config.data_path).unwrap();

        assert_eq!(
            generated.annotated.anomaly_count(),
            reloaded.annotated.anomaly_count()
        );
    }

    #[test]
    fn test_missing_input_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let missing = dir.path().join("absent.csv");

        let err = csv_only(&config).run_on_file(&missing).unwrap_err();

        assert_eq!(err.stage(), "io");
        assert!(err.to_string().contains("absent.csv"));
    }

    #[test]
    fn test_short_input_is_model_fit_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let input = dir.path().join("short.csv");
        fs::write(
            &input,
            "timestamp,cpu_percent\n2024-01-01 00:00:00,40.0\n2024-01-01 01:00:00,41.0\n",
        )
        .unwrap();

        let err = csv_only(&config).run_on_file(&input).unwrap_err();

        assert!(matches!(err, PipelineError::ModelFit(_)));
        assert!(err.to_string().starts_with("ModelFitError: "));
    }

    #[test]
    fn test_ensure_parent_creates_nested_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("a").join("b").join("report.csv");
        ensure_parent(&path).unwrap();
        assert!(dir.path().join("a").join("b").is_dir());
        assert!(ensure_parent(Path::new("report.csv")).is_ok());
    }
}

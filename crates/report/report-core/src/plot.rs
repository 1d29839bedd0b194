//! PNG chart of observed vs. predicted CPU with anomaly markers.
//!
//! The x axis is measured in hours since the first record and labelled with
//! wall-clock timestamps.

use std::ops::Range;
use std::path::{Path, PathBuf};

use anomaly_spi::{AnnotatedRecord, ThresholdBounds};
use chrono::{Duration, NaiveDateTime};
use plotters::prelude::*;
use report_spi::{ReportError, ReportKind, ReportSink, ReportSummary, Result};
use tracing::info;

const ACTUAL_COLOR: RGBColor = RGBColor(31, 119, 180);
const PREDICTED_COLOR: RGBColor = RGBColor(255, 127, 14);
const AXIS_LABEL_FORMAT: &str = "%m-%d %H:%M";

/// Canvas and marker dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub marker_size: u32,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 1400,
            height: 700,
            marker_size: 5,
        }
    }
}

/// Renders the detection chart to a PNG file.
#[derive(Debug, Clone)]
pub struct PlotRenderer {
    path: PathBuf,
    style: PlotStyle,
}

impl PlotRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            style: PlotStyle::default(),
        }
    }

    pub fn with_style(mut self, style: PlotStyle) -> Self {
        self.style = style;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn style(&self) -> PlotStyle {
        self.style
    }

    /// Chart title for a run with multiplier `threshold` and `anomalies` flags.
    pub fn title(threshold: f64, anomalies: usize) -> String {
        format!(
            "Server CPU Anomaly Detection (ARIMA) | Threshold: {} Sigma | Anomalies Found: {}",
            threshold, anomalies
        )
    }

    /// Vertical range covering `[0, 100]` and every plotted value, padded by 5%.
    pub fn value_range(records: &[AnnotatedRecord]) -> Range<f64> {
        let (lo, hi) = records
            .iter()
            .flat_map(|r| [r.cpu_percent, r.predicted])
            .fold((0.0_f64, 100.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
        let pad = (hi - lo) * 0.05;
        (lo - pad)..(hi + pad)
    }

    /// Horizontal range in hours since `start`.
    pub fn time_range(start: NaiveDateTime, records: &[AnnotatedRecord]) -> Range<f64> {
        let end = records
            .last()
            .map(|r| hours_between(start, r.timestamp))
            .unwrap_or(0.0);
        0.0..end.max(1.0)
    }

    /// Draw the chart for `records`.
    pub fn render(&self, records: &[AnnotatedRecord], bounds: &ThresholdBounds) -> Result<usize> {
        let first = records
            .first()
            .ok_or_else(|| ReportError::EmptyInput("no records to plot".to_string()))?;
        let start = first.timestamp;
        let anomalies = records.iter().filter(|r| r.is_anomaly).count();
        let plot_err = |e: &dyn std::fmt::Display| ReportError::Plot {
            path: self.path.clone(),
            message: e.to_string(),
        };

        let root = BitMapBackend::new(&self.path, (self.style.width, self.style.height))
            .into_drawing_area();
        root.fill(&WHITE).map_err(|e| plot_err(&e))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(Self::title(bounds.multiplier, anomalies), ("sans-serif", 22))
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d(Self::time_range(start, records), Self::value_range(records))
            .map_err(|e| plot_err(&e))?;

        let label_time = |x: &f64| {
            let at = start + Duration::seconds((x * 3600.0).round() as i64);
            at.format(AXIS_LABEL_FORMAT).to_string()
        };
        chart
            .configure_mesh()
            .x_desc("Timestamp")
            .y_desc("CPU Utilization (%)")
            .x_labels(12)
            .x_label_formatter(&label_time)
            .light_line_style(BLACK.mix(0.05))
            .bold_line_style(BLACK.mix(0.15))
            .draw()
            .map_err(|e| plot_err(&e))?;

        let point = |r: &AnnotatedRecord, y: f64| (hours_between(start, r.timestamp), y);

        chart
            .draw_series(LineSeries::new(
                records.iter().map(|r| point(r, r.cpu_percent)),
                ACTUAL_COLOR.mix(0.7).stroke_width(1),
            ))
            .map_err(|e| plot_err(&e))?
            .label("Actual CPU %")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], ACTUAL_COLOR));

        chart
            .draw_series(DashedLineSeries::new(
                records.iter().map(|r| point(r, r.predicted)),
                6,
                4,
                PREDICTED_COLOR.stroke_width(2),
            ))
            .map_err(|e| plot_err(&e))?
            .label("ARIMA Predicted")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], PREDICTED_COLOR));

        let marker = self.style.marker_size;
        chart
            .draw_series(
                records
                    .iter()
                    .filter(|r| r.is_anomaly)
                    .map(|r| Circle::new(point(r, r.cpu_percent), marker, RED.filled())),
            )
            .map_err(|e| plot_err(&e))?
            .label("Anomaly Detected")
            .legend(move |(x, y)| Circle::new((x + 10, y), marker, RED.filled()));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(|e| plot_err(&e))?;

        root.present().map_err(|e| plot_err(&e))?;
        info!(path = %self.path.display(), anomalies, "plot rendered");
        Ok(anomalies)
    }
}

impl ReportSink for PlotRenderer {
    fn kind(&self) -> ReportKind {
        ReportKind::Plot
    }

    fn emit(&self, records: &[AnnotatedRecord], bounds: &ThresholdBounds) -> Result<ReportSummary> {
        let anomalies = self.render(records, bounds)?;
        Ok(ReportSummary::new(ReportKind::Plot, &self.path, anomalies))
    }
}

fn hours_between(start: NaiveDateTime, at: NaiveDateTime) -> f64 {
    (at - start).num_seconds() as f64 / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn record(hour: i64, cpu: f64, predicted: f64) -> AnnotatedRecord {
        AnnotatedRecord {
            timestamp: start() + Duration::hours(hour),
            cpu_percent: cpu,
            predicted,
            residual: cpu - predicted,
            is_anomaly: false,
        }
    }

    #[test]
    fn test_title_format() {
        assert_eq!(
            PlotRenderer::title(2.5, 7),
            "Server CPU Anomaly Detection (ARIMA) | Threshold: 2.5 Sigma | Anomalies Found: 7"
        );
        assert_eq!(
            PlotRenderer::title(3.0, 0),
            "Server CPU Anomaly Detection (ARIMA) | Threshold: 3 Sigma | Anomalies Found: 0"
        );
    }

    #[test]
    fn test_value_range_covers_percent_scale() {
        let range = PlotRenderer::value_range(&[record(0, 40.0, 41.0)]);
        assert_eq!(range, -5.0..105.0);
    }

    #[test]
    fn test_value_range_extends_for_overshoot() {
        let range = PlotRenderer::value_range(&[record(0, 95.0, 120.0), record(1, 0.0, -20.0)]);
        assert!(range.start < -20.0);
        assert!(range.end > 120.0);
    }

    #[test]
    fn test_time_range_in_hours() {
        let records: Vec<_> = (0..720).map(|h| record(h, 50.0, 50.0)).collect();
        assert_eq!(PlotRenderer::time_range(start(), &records), 0.0..719.0);
        assert_eq!(PlotRenderer::time_range(start(), &records[..1]), 0.0..1.0);
    }

    #[test]
    fn test_default_style() {
        let renderer = PlotRenderer::new("outputs/detection_plot.png");
        assert_eq!(renderer.style().width, 1400);
        assert_eq!(renderer.style().height, 700);
        assert_eq!(renderer.path(), Path::new("outputs/detection_plot.png"));
    }

    #[test]
    fn test_render_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.png");
        let mut records: Vec<_> = (0..48)
            .map(|h| record(h, 40.0 + (h % 24) as f64, 40.0 + (h % 24) as f64 - 0.5))
            .collect();
        records[30].cpu_percent = 95.0;
        records[30].residual = 95.0 - records[30].predicted;
        records[30].is_anomaly = true;

        let summary = PlotRenderer::new(&path)
            .emit(&records, &ThresholdBounds::new(0.0, 2.0, 2.5))
            .unwrap();

        assert_eq!(summary.kind, ReportKind::Plot);
        assert_eq!(summary.anomalies, 1);
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    }

    #[test]
    fn test_render_does_not_touch_records() {
        let dir = tempfile::tempdir().unwrap();
        let records: Vec<_> = (0..10).map(|h| record(h, 50.0, 49.0)).collect();
        let before = records.clone();

        let anomalies = PlotRenderer::new(dir.path().join("plot.png"))
            .render(&records, &ThresholdBounds::new(1.0, 0.0, 2.5))
            .unwrap();

        assert_eq!(anomalies, 0);
        assert_eq!(records, before);
    }

    #[test]
    fn test_render_rejects_empty_input() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = PlotRenderer::new(dir.path().join("plot.png"));
        let result = renderer.render(&[], &ThresholdBounds::new(0.0, 1.0, 2.5));
        assert!(matches!(result, Err(ReportError::EmptyInput(_))));
    }
}

//! End-to-end tests for the anomaly facade
//!
//! Generates a CPU series, fits ARIMA, and classifies the residuals.

use anomaly_facade::{
    AnomalyError, ResidualAnalyzer, ResidualConfigBuilder, ResidualDetector, StdDevKind,
};
use forecast_facade::prelude::*;
use series_facade::{GeneratorConfigBuilder, SyntheticGenerator, TimeSeries};

fn generate(indices: Vec<usize>, magnitudes: Vec<f64>) -> TimeSeries {
    let config = GeneratorConfigBuilder::new()
        .signal(40.0, 10.0, 24.0, 0.0)
        .noise_std(1.0)
        .anomalies(indices, magnitudes)
        .build()
        .unwrap();
    SyntheticGenerator::new(config)
        .unwrap()
        .generate_seeded()
        .unwrap()
}

fn predict(series: &TimeSeries) -> Vec<f64> {
    ArimaEstimator::default()
        .fit(&series.values(), ArimaOrder::default())
        .unwrap()
        .fitted_values()
        .unwrap()
}

#[test]
fn e2e_injected_spikes_are_flagged() {
    let series = generate(vec![120, 300, 550], vec![35.0]);
    let predicted = predict(&series);

    let annotated = ResidualAnalyzer::default()
        .annotate(&series, &predicted)
        .unwrap();

    assert_eq!(annotated.len(), series.len());
    let flagged: Vec<usize> = annotated
        .records()
        .iter()
        .enumerate()
        .filter(|(_, r)| r.is_anomaly)
        .map(|(i, _)| i)
        .collect();
    for index in [120, 300, 550] {
        assert!(flagged.contains(&index), "spike at {} not flagged", index);
    }
    // Background noise stays well under the threshold most of the time
    assert!(flagged.len() < series.len() / 20, "too many flags: {}", flagged.len());
}

#[test]
fn e2e_flags_agree_with_bounds() {
    let series = generate(vec![200, 400], vec![30.0, -30.0]);
    let predicted = predict(&series);
    let analysis = ResidualAnalyzer::default()
        .analyze(&series.values(), &predicted)
        .unwrap();

    let bounds = analysis.bounds;
    for (residual, flagged) in analysis.residuals.iter().zip(&analysis.is_anomaly) {
        assert_eq!(*flagged, *residual > bounds.upper || *residual < bounds.lower);
    }
    assert!((bounds.upper - bounds.lower - 2.0 * 2.5 * bounds.std_dev).abs() < 1e-9);
}

#[test]
fn e2e_higher_threshold_flags_subset() {
    let series = generate(vec![100, 250, 500], vec![25.0, 12.0]);
    let predicted = predict(&series);
    let observed = series.values();

    let loose = ResidualAnalyzer::new(2.0)
        .unwrap()
        .analyze(&observed, &predicted)
        .unwrap();
    let strict = ResidualAnalyzer::new(3.5)
        .unwrap()
        .analyze(&observed, &predicted)
        .unwrap();

    assert!(strict.anomaly_count() <= loose.anomaly_count());
    for index in strict.anomaly_indices() {
        assert!(loose.is_anomaly[index]);
    }
}

#[test]
fn e2e_population_std_is_narrower() {
    let series = generate(vec![300], vec![30.0]);
    let predicted = predict(&series);
    let observed = series.values();

    let config = ResidualConfigBuilder::new()
        .std_dev_kind(StdDevKind::Population)
        .build()
        .unwrap();
    let population = ResidualAnalyzer::from_config(config)
        .unwrap()
        .analyze(&observed, &predicted)
        .unwrap();
    let sample = ResidualAnalyzer::default()
        .analyze(&observed, &predicted)
        .unwrap();

    assert!(population.bounds.std_dev < sample.bounds.std_dev);
    assert_eq!(population.bounds.mean, sample.bounds.mean);
}

#[test]
fn e2e_truncated_predictions_rejected() {
    let series = generate(vec![], vec![]);
    let predicted = predict(&series);
    let result = ResidualAnalyzer::default().analyze(&series.values(), &predicted[1..]);
    assert!(matches!(result, Err(AnomalyError::LengthMismatch { .. })));
}

#[test]
fn e2e_first_row_has_zero_residual_and_is_not_flagged() {
    let series = generate(vec![], vec![]);
    let predicted = predict(&series);
    let observed = series.values();
    assert_eq!(predicted[0], observed[0]);

    let analysis = ResidualAnalyzer::default()
        .analyze(&observed, &predicted)
        .unwrap();
    assert_eq!(analysis.residuals[0], 0.0);
    assert!(!analysis.is_anomaly[0]);
    // A zero prediction at row 0 would sit near 40 and dominate the spread
    assert!(analysis.bounds.std_dev < 10.0);
}

//! Whole-population summary statistics.

use anomaly_api::StdDevKind;

/// Arithmetic mean, computed relative to the first value.
///
/// Shifting by the first element keeps a population of identical values
/// returning exactly that value, so a zero-spread population never flags
/// against its own mean. Returns 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    let Some(&first) = values.first() else {
        return 0.0;
    };
    let shifted: f64 = values.iter().map(|v| v - first).sum();
    first + shifted / values.len() as f64
}

/// Standard deviation around `center`.
///
/// The sample estimator of a single value is defined as 0.
pub fn std_dev(values: &[f64], center: f64, kind: StdDevKind) -> f64 {
    let n = values.len();
    let denom = match kind {
        StdDevKind::Sample if n > 1 => (n - 1) as f64,
        StdDevKind::Sample => return 0.0,
        StdDevKind::Population if n > 0 => n as f64,
        StdDevKind::Population => return 0.0,
    };
    let ss: f64 = values.iter().map(|v| (v - center).powi(2)).sum();
    (ss / denom).sqrt()
}

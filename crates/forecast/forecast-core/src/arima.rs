//! ARIMA (AutoRegressive Integrated Moving Average) estimation
//!
//! The model combines three components:
//!
//! - **AR (AutoRegressive)**: past values of the differenced series
//! - **I (Integrated)**: `d` rounds of differencing
//! - **MA (Moving Average)**: past one-step prediction errors
//!
//! ## Estimation
//!
//! - `q == 0`: Yule-Walker equations solved with Levinson-Durbin.
//! - `q > 0`: Hannan-Rissanen. A long autoregression estimates the
//!   innovations, then AR and MA coefficients are found jointly by least
//!   squares on lagged values and lagged innovations.
//!
//! ## In-sample prediction
//!
//! The prediction for index `t` only uses observations before `t`. The first
//! `d` points have no differenced history and are predicted as themselves.

use std::ops::Range;

use forecast_api::ArimaConfig;
use forecast_spi::{ArimaOrder, FittedModel, ForecastError, Forecaster, ModelSummary, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::differencing::{difference, undifference_at};
use crate::linalg::{autocovariances, least_squares, levinson_durbin};

/// Variance below which a series is considered to carry no signal.
const MIN_VARIANCE: f64 = 1e-12;

/// Fits ARIMA models according to an [`ArimaConfig`].
#[derive(Debug, Clone, Default)]
pub struct ArimaEstimator {
    config: ArimaConfig,
}

impl ArimaEstimator {
    pub fn new(config: ArimaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ArimaConfig {
        &self.config
    }

    fn validate(series: &[f64], order: ArimaOrder) -> Result<()> {
        let required = order.min_observations();
        if series.len() < required {
            return Err(ForecastError::InsufficientData {
                required,
                actual: series.len(),
            });
        }
        if series.iter().any(|x| !x.is_finite()) {
            return Err(ForecastError::InvalidData(
                "Data contains NaN or infinite values".to_string(),
            ));
        }
        if series.iter().all(|&x| x == series[0]) {
            return Err(ForecastError::DegenerateSeries(format!(
                "series is constant at {}",
                series[0]
            )));
        }
        Ok(())
    }

    fn long_ar_order(&self, order: ArimaOrder, n: usize) -> usize {
        let default = (2.0 * (n as f64).ln()).ceil() as usize;
        self.config
            .long_ar_order
            .unwrap_or(default)
            .max(order.p() + order.q())
            .min(n / 3)
    }

    /// Hannan-Rissanen estimation of AR and MA coefficients.
    fn hannan_rissanen(&self, z: &[f64], order: ArimaOrder) -> Result<(Vec<f64>, Vec<f64>)> {
        let (p, q) = (order.p(), order.q());
        let n = z.len();
        let m = self.long_ar_order(order, n);
        if m == 0 {
            return Err(ForecastError::InsufficientData {
                required: 3 * (p + q).max(1),
                actual: n,
            });
        }

        let long_ar = levinson_durbin(&autocovariances(z, m), m)?;
        let innovations: Vec<f64> = (0..n)
            .map(|t| {
                if t < m {
                    0.0
                } else {
                    z[t] - (0..m).map(|j| long_ar[j] * z[t - j - 1]).sum::<f64>()
                }
            })
            .collect();
        debug!(long_order = m, "estimated innovations from long autoregression");

        let start = m + q.max(p);
        let mut design = Vec::with_capacity(n.saturating_sub(start));
        let mut target = Vec::with_capacity(n.saturating_sub(start));
        for t in start..n {
            let mut row = Vec::with_capacity(p + q);
            row.extend((1..=p).map(|i| z[t - i]));
            row.extend((1..=q).map(|k| innovations[t - k]));
            design.push(row);
            target.push(z[t]);
        }

        let beta = least_squares(&design, &target)?;
        let (ar, ma) = beta.split_at(p);
        Ok((ar.to_vec(), ma.to_vec()))
    }
}

impl Forecaster for ArimaEstimator {
    type Model = FittedArima;

    fn fit(&self, series: &[f64], order: ArimaOrder) -> Result<FittedArima> {
        Self::validate(series, order)?;

        let differenced = difference(series, order.d());
        let n = differenced.len();
        let diff_mean = differenced.iter().sum::<f64>() / n as f64;
        let diff_var = differenced
            .iter()
            .map(|x| (x - diff_mean).powi(2))
            .sum::<f64>()
            / n as f64;
        if diff_var <= MIN_VARIANCE {
            return Err(ForecastError::DegenerateSeries(format!(
                "series differenced {} time(s) has zero variance",
                order.d()
            )));
        }

        let include_constant = self.config.constant_for(order);
        let constant = if include_constant { diff_mean } else { 0.0 };
        let centered: Vec<f64> = differenced.iter().map(|x| x - constant).collect();

        let (ar_coeffs, ma_coeffs) = if order.q() == 0 {
            let phi = levinson_durbin(&autocovariances(&centered, order.p()), order.p())?;
            (phi, Vec::new())
        } else {
            self.hannan_rissanen(&centered, order)?
        };

        let model = FittedArima::from_coefficients(
            order,
            series.to_vec(),
            differenced,
            ar_coeffs,
            ma_coeffs,
            constant,
            include_constant,
        )?;

        info!(
            order = %order,
            n_obs = series.len(),
            aic = model.summary.aic,
            sigma2 = model.summary.sigma2,
            "fitted ARIMA model"
        );
        Ok(model)
    }
}

/// Immutable ARIMA model produced by [`ArimaEstimator`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FittedArima {
    order: ArimaOrder,
    ar_coeffs: Vec<f64>,
    ma_coeffs: Vec<f64>,
    constant: f64,
    include_constant: bool,
    /// One-step predictions on the original scale, one per training point
    fitted: Vec<f64>,
    /// Conditional innovations on the differenced scale
    innovations: Vec<f64>,
    summary: ModelSummary,
}

impl FittedArima {
    fn from_coefficients(
        order: ArimaOrder,
        series: Vec<f64>,
        differenced: Vec<f64>,
        ar_coeffs: Vec<f64>,
        ma_coeffs: Vec<f64>,
        constant: f64,
        include_constant: bool,
    ) -> Result<Self> {
        let n = differenced.len();
        let mut diff_predictions = vec![0.0; n];
        let mut innovations = vec![0.0; n];

        for j in 0..n {
            let ar: f64 = ar_coeffs
                .iter()
                .enumerate()
                .filter(|(i, _)| j > *i)
                .map(|(i, phi)| phi * (differenced[j - i - 1] - constant))
                .sum();
            let ma: f64 = ma_coeffs
                .iter()
                .enumerate()
                .filter(|(k, _)| j > *k)
                .map(|(k, theta)| theta * innovations[j - k - 1])
                .sum();
            diff_predictions[j] = constant + ar + ma;
            innovations[j] = differenced[j] - diff_predictions[j];
        }

        let d = order.d();
        let fitted: Vec<f64> = (0..series.len())
            .map(|t| {
                if t < d {
                    series[t]
                } else {
                    undifference_at(&series, t, d, diff_predictions[t - d])
                }
            })
            .collect();

        if fitted.iter().any(|v| !v.is_finite()) {
            return Err(ForecastError::NonInvertible(
                "in-sample predictions are not finite".to_string(),
            ));
        }

        let summary = Self::summarize(&innovations, order, include_constant);
        Ok(Self {
            order,
            ar_coeffs,
            ma_coeffs,
            constant,
            include_constant,
            fitted,
            innovations,
            summary,
        })
    }

    /// Conditional Gaussian likelihood over innovations with full AR history.
    fn summarize(innovations: &[f64], order: ArimaOrder, include_constant: bool) -> ModelSummary {
        let used = &innovations[order.p().min(innovations.len())..];
        let m = used.len().max(1) as f64;
        let sigma2 = used.iter().map(|e| e * e).sum::<f64>() / m;
        let log_likelihood = -0.5 * m * ((2.0 * std::f64::consts::PI * sigma2).ln() + 1.0);
        let n_params = order.p() + order.q() + usize::from(include_constant) + 1;
        ModelSummary {
            log_likelihood,
            aic: -2.0 * log_likelihood + 2.0 * n_params as f64,
            sigma2,
            n_params,
            n_residuals: used.len(),
        }
    }

    /// AR coefficients `φ_1..φ_p`.
    pub fn ar_coefficients(&self) -> &[f64] {
        &self.ar_coeffs
    }

    /// MA coefficients `θ_1..θ_q`.
    pub fn ma_coefficients(&self) -> &[f64] {
        &self.ma_coeffs
    }

    /// Constant of the differenced process (0 when not included).
    pub fn constant(&self) -> f64 {
        self.constant
    }

    pub fn has_constant(&self) -> bool {
        self.include_constant
    }

    /// Conditional innovations on the differenced scale.
    pub fn innovations(&self) -> &[f64] {
        &self.innovations
    }

    pub fn aic(&self) -> f64 {
        self.summary.aic
    }

    pub fn log_likelihood(&self) -> f64 {
        self.summary.log_likelihood
    }
}

impl FittedModel for FittedArima {
    fn order(&self) -> ArimaOrder {
        self.order
    }

    fn n_obs(&self) -> usize {
        self.fitted.len()
    }

    fn predict_in_sample(&self, range: Range<usize>) -> Result<Vec<f64>> {
        if range.start > range.end || range.end > self.fitted.len() {
            return Err(ForecastError::InvalidRange {
                start: range.start,
                end: range.end,
                len: self.fitted.len(),
            });
        }
        Ok(self.fitted[range].to_vec())
    }

    fn summary(&self) -> ModelSummary {
        self.summary
    }
}

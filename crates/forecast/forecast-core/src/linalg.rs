//! Small dense linear algebra for model estimation.

use forecast_spi::{ForecastError, Result};

/// Values with magnitude below this are treated as zero.
const EPS: f64 = 1e-10;

/// Biased sample autocovariances `γ_0..=γ_max_lag` of an already centred series.
pub fn autocovariances(centered: &[f64], max_lag: usize) -> Vec<f64> {
    let n = centered.len() as f64;
    (0..=max_lag)
        .map(|k| {
            centered
                .iter()
                .skip(k)
                .zip(centered)
                .map(|(a, b)| a * b)
                .sum::<f64>()
                / n
        })
        .collect()
}

/// Solve the Yule-Walker equations for an AR(`order`) model with the
/// Levinson-Durbin recursion.
///
/// `autocov` must hold at least `order + 1` lags. Fails when the prediction
/// error variance collapses, which means the Toeplitz system is singular.
pub fn levinson_durbin(autocov: &[f64], order: usize) -> Result<Vec<f64>> {
    if order == 0 {
        return Ok(Vec::new());
    }
    if autocov.len() < order + 1 {
        return Err(ForecastError::InvalidParameter {
            name: "autocov".to_string(),
            reason: format!("need {} lags, got {}", order + 1, autocov.len()),
        });
    }

    let mut phi = vec![0.0; order];
    let mut err = autocov[0];

    for k in 0..order {
        if err.abs() <= EPS {
            return Err(ForecastError::NonInvertible(format!(
                "Yule-Walker system singular at lag {}",
                k + 1
            )));
        }
        let acc = autocov[k + 1] - (0..k).map(|j| phi[j] * autocov[k - j]).sum::<f64>();
        let reflection = acc / err;

        let previous = phi.clone();
        phi[k] = reflection;
        for j in 0..k {
            phi[j] = previous[j] - reflection * previous[k - 1 - j];
        }
        err *= 1.0 - reflection * reflection;
    }

    if phi.iter().any(|c| !c.is_finite()) {
        return Err(ForecastError::NonInvertible(
            "Levinson-Durbin produced non-finite coefficients".to_string(),
        ));
    }
    Ok(phi)
}

/// Solve `a x = b` by Gaussian elimination with partial pivoting.
pub fn solve(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Result<Vec<f64>> {
    let n = b.len();
    if a.len() != n || a.iter().any(|row| row.len() != n) {
        return Err(ForecastError::InvalidParameter {
            name: "matrix".to_string(),
            reason: "system must be square and match the right-hand side".to_string(),
        });
    }

    for col in 0..n {
        let pivot = (col..n)
            .max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))
            .unwrap_or(col);
        if a[pivot][col].abs() <= EPS {
            return Err(ForecastError::NonInvertible(format!(
                "zero pivot in column {}",
                col
            )));
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in (col + 1)..n {
            let factor = a[row][col] / a[col][col];
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let tail: f64 = ((row + 1)..n).map(|k| a[row][k] * x[k]).sum();
        x[row] = (b[row] - tail) / a[row][row];
    }

    if x.iter().any(|v| !v.is_finite()) {
        return Err(ForecastError::NonInvertible(
            "linear solve produced non-finite values".to_string(),
        ));
    }
    Ok(x)
}

/// Ordinary least squares via the normal equations.
///
/// Each entry of `design` is one observation row.
pub fn least_squares(design: &[Vec<f64>], target: &[f64]) -> Result<Vec<f64>> {
    let cols = design.first().map_or(0, Vec::len);
    if cols == 0 {
        return Ok(Vec::new());
    }
    if design.len() < cols {
        return Err(ForecastError::InsufficientData {
            required: cols,
            actual: design.len(),
        });
    }

    let mut xtx = vec![vec![0.0; cols]; cols];
    let mut xty = vec![0.0; cols];
    for (row, &y) in design.iter().zip(target) {
        for i in 0..cols {
            xty[i] += row[i] * y;
            for j in i..cols {
                xtx[i][j] += row[i] * row[j];
            }
        }
    }
    for i in 0..cols {
        for j in 0..i {
            xtx[i][j] = xtx[j][i];
        }
    }
    solve(xtx, xty)
}

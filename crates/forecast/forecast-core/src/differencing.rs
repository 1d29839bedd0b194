//! Differencing helpers.

/// Apply `order` rounds of first differencing.
pub fn difference(data: &[f64], order: usize) -> Vec<f64> {
    let mut result = data.to_vec();
    for _ in 0..order {
        result = result.windows(2).map(|w| w[1] - w[0]).collect();
    }
    result
}

/// Binomial coefficient `C(n, k)` for the small orders used here.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}

/// Map a prediction of the `d`-times differenced value at `t` back to the
/// original scale, using the observations before `t`.
///
/// Relies on `Δ^d y_t = Σ_{k=0..d} (-1)^k C(d,k) y_{t-k}`. Requires `t >= d`.
pub fn undifference_at(history: &[f64], t: usize, d: usize, diff_prediction: f64) -> f64 {
    (1..=d).fold(diff_prediction, |acc, k| {
        let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
        acc - sign * binomial(d, k) * history[t - k]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difference_orders() {
        let data = vec![1.0, 4.0, 9.0, 16.0, 25.0];
        assert_eq!(difference(&data, 0), data);
        assert_eq!(difference(&data, 1), vec![3.0, 5.0, 7.0, 9.0]);
        assert_eq!(difference(&data, 2), vec![2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_difference_short_input() {
        assert!(difference(&[1.0], 1).is_empty());
        assert!(difference(&[], 2).is_empty());
    }

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(2, 0), 1.0);
        assert_eq!(binomial(2, 1), 2.0);
        assert_eq!(binomial(2, 2), 1.0);
        assert_eq!(binomial(1, 2), 0.0);
    }

    #[test]
    fn test_undifference_recovers_observation() {
        let data = vec![1.0, 4.0, 9.0, 16.0, 25.0];
        let d1 = difference(&data, 1);
        let d2 = difference(&data, 2);
        for t in 1..data.len() {
            assert!((undifference_at(&data, t, 1, d1[t - 1]) - data[t]).abs() < 1e-12);
        }
        for t in 2..data.len() {
            assert!((undifference_at(&data, t, 2, d2[t - 2]) - data[t]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_undifference_order_zero_is_identity() {
        assert_eq!(undifference_at(&[5.0], 0, 0, 3.5), 3.5);
    }
}

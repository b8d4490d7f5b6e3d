use crate::loss::check_lengths;

pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²)
    ///
    /// # Panics
    /// Panics if the slices differ in length or are empty.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        check_lengths(predicted, expected);
        let n = predicted.len() as f64;
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| (p - y).powi(2))
            .sum::<f64>() / n
    }

    /// Per-output gradient: 2·(predicted - expected)
    ///
    /// # Panics
    /// Panics if the slices differ in length or are empty.
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        check_lengths(predicted, expected);
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| 2.0 * (p - y))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loss_is_zero_at_exact_prediction() {
        assert_eq!(MseLoss::loss(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]), 0.0);
    }

    #[test]
    fn loss_averages_squared_differences() {
        // diffs (1, 0, -1) -> squares (1, 0, 1) -> mean 2/3
        let loss = MseLoss::loss(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]);
        assert!((loss - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn derivative_is_twice_the_difference() {
        let grad = MseLoss::derivative(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]);
        assert_eq!(grad, vec![2.0, 0.0, -2.0]);
    }

    #[test]
    fn derivative_vanishes_at_exact_prediction() {
        let grad = MseLoss::derivative(&[0.5, -1.5], &[0.5, -1.5]);
        assert_eq!(grad, vec![0.0, 0.0]);
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn rejects_mismatched_lengths() {
        MseLoss::loss(&[1.0, 2.0], &[1.0]);
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn rejects_empty_inputs() {
        MseLoss::loss(&[], &[]);
    }
}

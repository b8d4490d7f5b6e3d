use crate::loss::check_lengths;

pub struct HuberLoss;

// δ fixed at 1.0 so the LossType variant stays unit (Copy + Eq).
const DELTA: f64 = 1.0;

impl HuberLoss {
    /// Scalar Huber: mean(h(predicted − expected))
    /// where h(x) = 0.5·x²  if |x| ≤ δ
    ///              δ·(|x| − 0.5·δ)  otherwise
    ///
    /// # Panics
    /// Panics if the slices differ in length or are empty.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        check_lengths(predicted, expected);
        let n = predicted.len() as f64;
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| {
                let x = p - y;
                if x.abs() <= DELTA {
                    0.5 * x * x
                } else {
                    DELTA * (x.abs() - 0.5 * DELTA)
                }
            })
            .sum::<f64>() / n
    }

    /// Per-output gradient: x  if |x| ≤ δ,  else δ·sign(x)
    ///
    /// # Panics
    /// Panics if the slices differ in length or are empty.
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        check_lengths(predicted, expected);
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| {
                let x = p - y;
                if x.abs() <= DELTA { x } else { DELTA * x.signum() }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadratic_inside_delta() {
        // x = 0.5: 0.5 · 0.25 = 0.125
        let loss = HuberLoss::loss(&[0.5], &[0.0]);
        assert!((loss - 0.125).abs() < 1e-12);
    }

    #[test]
    fn linear_outside_delta() {
        // x = 3: 1.0 · (3 - 0.5) = 2.5
        let loss = HuberLoss::loss(&[3.0], &[0.0]);
        assert!((loss - 2.5).abs() < 1e-12);
    }

    #[test]
    fn gradient_is_clamped_to_delta() {
        let grad = HuberLoss::derivative(&[3.0, -3.0, 0.25], &[0.0, 0.0, 0.0]);
        assert_eq!(grad, vec![1.0, -1.0, 0.25]);
    }
}

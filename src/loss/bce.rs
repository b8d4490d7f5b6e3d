use crate::loss::check_lengths;

pub struct BceLoss;

/// Predicted probabilities are clamped into [EPS, 1 - EPS] before any log or
/// division, so predictions of exactly 0.0 or 1.0 stay finite.
const EPS: f64 = 1e-15;

impl BceLoss {
    /// Scalar BCE: -mean(y·ln(p) + (1-y)·ln(1-p)), with p clamped.
    ///
    /// Reduces to the mean over outputs, so a multi-output sample still
    /// yields a single scalar.
    ///
    /// # Panics
    /// Panics if the slices differ in length or are empty.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        check_lengths(predicted, expected);
        let n = predicted.len() as f64;
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| {
                let p = p.clamp(EPS, 1.0 - EPS);
                -(y * p.ln() + (1.0 - y) * (1.0 - p).ln())
            })
            .sum::<f64>() / n
    }

    /// Per-output gradient: (p - y) / (p·(1 - p)), with p clamped.
    ///
    /// # Panics
    /// Panics if the slices differ in length or are empty.
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        check_lengths(predicted, expected);
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| {
                let p = p.clamp(EPS, 1.0 - EPS);
                (p - y) / (p * (1.0 - p))
            })
            .collect()
    }
}

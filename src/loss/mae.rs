use crate::loss::check_lengths;

pub struct MaeLoss;

impl MaeLoss {
    /// Scalar MAE: mean(|predicted - expected|)
    ///
    /// # Panics
    /// Panics if the slices differ in length or are empty.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        check_lengths(predicted, expected);
        let n = predicted.len() as f64;
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| (p - y).abs())
            .sum::<f64>() / n
    }

    /// Per-output subgradient: sign(p - y), 0 when equal.
    ///
    /// # Panics
    /// Panics if the slices differ in length or are empty.
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        check_lengths(predicted, expected);
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| {
                let diff = p - y;
                if diff > 0.0 { 1.0 } else if diff < 0.0 { -1.0 } else { 0.0 }
            })
            .collect()
    }
}

use crate::loss::check_lengths;

/// Categorical cross-entropy over a predicted probability distribution.
pub struct CrossEntropyLoss;

impl CrossEntropyLoss {
    /// Computes the scalar cross-entropy loss:
    ///   L = -sum(expected[i] * ln(predicted[i]))
    ///
    /// `predicted` — probability distribution, shape [n_classes]
    /// `expected`  — one-hot (or soft) target distribution, shape [n_classes]
    ///
    /// No clamping is applied: the caller must guarantee `predicted > 0`
    /// wherever `expected > 0`, otherwise the result is infinite or NaN
    /// under the usual IEEE-754 rules.
    ///
    /// # Panics
    /// Panics if the slices differ in length or are empty.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        check_lengths(predicted, expected);
        predicted.iter().zip(expected.iter())
            .map(|(p, e)| -e * p.ln())
            .sum()
    }

    /// Gradient of the loss w.r.t. the predicted probabilities themselves:
    ///   ∂L/∂p_i = -expected[i] / predicted[i]   (element-wise)
    ///
    /// A zero predicted element divides to ±inf (NaN when the matching
    /// expected element is also zero); nothing is caught here. Callers
    /// pairing this loss with a Softmax output that wants the fused
    /// `predicted - expected` shortcut should compute that shortcut in
    /// their own backward pass instead.
    ///
    /// # Panics
    /// Panics if the slices differ in length or are empty.
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        check_lengths(predicted, expected);
        predicted.iter().zip(expected.iter())
            .map(|(p, e)| -e / p)
            .collect()
    }
}

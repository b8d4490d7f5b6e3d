use serde::{Serialize, Deserialize};

use crate::loss::bce::BceLoss;
use crate::loss::cross_entropy::CrossEntropyLoss;
use crate::loss::huber::HuberLoss;
use crate::loss::mae::MaeLoss;
use crate::loss::mse::MseLoss;

/// Selects which loss function a training loop uses.
///
/// - `Mse`                — Mean-squared error; pair with Identity or Sigmoid output.
/// - `CrossEntropy`       — Categorical cross-entropy; pair with a probability
///   output such as Softmax. The gradient is taken w.r.t. the probabilities
///   themselves (`-expected / predicted`), not the pre-softmax logits.
/// - `BinaryCrossEntropy` — Binary cross-entropy; pair with Sigmoid output.
/// - `Mae`                — Mean absolute error; pair with Identity output.
/// - `Huber`              — Huber loss (δ=1.0); pair with Identity output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossType {
    Mse,
    CrossEntropy,
    BinaryCrossEntropy,
    Mae,
    Huber,
}

impl LossType {
    /// Scalar loss for one sample — dispatches on the variant.
    pub fn loss(&self, predicted: &[f64], expected: &[f64]) -> f64 {
        match self {
            LossType::Mse                => MseLoss::loss(predicted, expected),
            LossType::CrossEntropy       => CrossEntropyLoss::loss(predicted, expected),
            LossType::BinaryCrossEntropy => BceLoss::loss(predicted, expected),
            LossType::Mae                => MaeLoss::loss(predicted, expected),
            LossType::Huber              => HuberLoss::loss(predicted, expected),
        }
    }

    /// Per-output gradient for one sample — dispatches on the variant.
    pub fn derivative(&self, predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        match self {
            LossType::Mse                => MseLoss::derivative(predicted, expected),
            LossType::CrossEntropy       => CrossEntropyLoss::derivative(predicted, expected),
            LossType::BinaryCrossEntropy => BceLoss::derivative(predicted, expected),
            LossType::Mae                => MaeLoss::derivative(predicted, expected),
            LossType::Huber              => HuberLoss::derivative(predicted, expected),
        }
    }
}

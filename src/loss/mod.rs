pub mod mse;
pub mod bce;
pub mod cross_entropy;
pub mod mae;
pub mod huber;
pub mod loss_type;

pub use mse::MseLoss;
pub use bce::BceLoss;
pub use cross_entropy::CrossEntropyLoss;
pub use mae::MaeLoss;
pub use huber::HuberLoss;
pub use loss_type::LossType;

/// Shared precondition for every loss and derivative: the two slices must
/// have the same non-zero length.
pub(crate) fn check_lengths(predicted: &[f64], expected: &[f64]) {
    assert_eq!(
        predicted.len(),
        expected.len(),
        "predicted and expected must have equal length"
    );
    assert!(!predicted.is_empty(), "loss inputs must not be empty");
}

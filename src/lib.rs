pub mod loss;

// Convenience re-exports
pub use loss::mse::MseLoss;
pub use loss::bce::BceLoss;
pub use loss::cross_entropy::CrossEntropyLoss;
pub use loss::mae::MaeLoss;
pub use loss::huber::HuberLoss;
pub use loss::loss_type::LossType;

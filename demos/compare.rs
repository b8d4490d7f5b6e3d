use lossfn::LossType;

fn main() {
    // One-hot classification sample: the model leans toward the right class.
    let predicted = vec![0.7, 0.2, 0.1];
    let expected = vec![1.0, 0.0, 0.0];

    println!("predicted = {predicted:?}");
    println!("expected  = {expected:?}");
    println!();

    for loss_type in [
        LossType::Mse,
        LossType::CrossEntropy,
        LossType::BinaryCrossEntropy,
        LossType::Mae,
        LossType::Huber,
    ] {
        let loss = loss_type.loss(&predicted, &expected);
        let grad = loss_type.derivative(&predicted, &expected);
        println!("{loss_type:?}: loss = {loss:.6}");
        println!("    gradient = {grad:?}");
    }
}

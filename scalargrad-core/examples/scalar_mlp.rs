//! # Scalar MLP walkthrough
//!
//! Builds a small perceptron, runs one forward and one backward pass, and
//! prints the parameter gradients and the Graphviz description of a neuron.
//!
//! Run with `RUST_LOG=debug` to see construction and backward-pass logs.

use scalargrad_core::nn::{Activation, InitConfig, Mlp, Module, Neuron};
use scalargrad_core::viz::{to_dot, RankDir};
use scalargrad_core::{ScalarGradError, Value};

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    // --- 1. A hand-built expression ---
    let a = Value::with_label(2.0, "a");
    let b = Value::with_label(-3.0, "b");
    let c = Value::with_label(10.0, "c");
    let f = Value::with_label(-2.0, "f");
    let loss = ((&a * &b + &c) * &f).labeled("L");
    loss.backward();
    println!("L = {:.4}", loss.data());
    for v in [&a, &b, &c, &f] {
        println!("  dL/d{} = {:.4}", v.label().unwrap_or_default(), v.grad());
    }

    // --- 2. A seeded perceptron ---
    let config = InitConfig::default().with_seed(42);
    let mlp = Mlp::with_config(3, &[4, 4, 1], Activation::Tanh, &config)?;
    println!("\nMLP with {} parameters", mlp.num_parameters());

    let y = mlp.forward_raw(&[2.0, 3.0, -1.0])?;
    let target = 1.0;
    let squared_error = (&y[0] - target).pow(2.0);
    squared_error.backward();
    println!("prediction = {:.4}, squared error = {:.4}", y[0].data(), squared_error.data());
    for (name, param) in mlp.named_parameters().iter().take(5) {
        println!("  {:<24} data {:>8.4}  grad {:>8.4}", name, param.data(), param.grad());
    }
    mlp.zero_grad();

    // --- 3. Graph export ---
    let neuron = Neuron::from_weights(&[1.0, -1.0], 0.0, Activation::Tanh);
    let x = scalargrad_core::value::labeled_leaves(&[1.0, 1.0], "x");
    let out = neuron.forward(&x)?.labeled("out");
    out.backward();
    println!("\n{}", to_dot(&out, RankDir::LR));

    Ok(())
}

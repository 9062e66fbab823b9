use approx::assert_relative_eq;
use scalargrad_core::autograd::grad_check::check_grad;
use scalargrad_core::nn::{Activation, InitConfig, Layer, Mlp, Module, Neuron};
use scalargrad_core::viz::{to_dot, trace, RankDir};
use scalargrad_core::{ScalarGradError, Value};

mod common;
use common::{grads, init_logging, inputs};

#[test]
fn test_mlp_end_to_end() {
    init_logging();
    let cfg = InitConfig::default().with_seed(42);
    let mlp = Mlp::with_config(3, &[4, 4, 1], Activation::Tanh, &cfg).unwrap();
    assert_eq!(mlp.num_parameters(), 41);

    let y = mlp.forward_single(&inputs(&[2.0, 3.0, -1.0])).unwrap();
    assert!(y.data().is_finite());
    y.backward();
    assert!(mlp.parameters().iter().all(|p| p.grad().is_finite()));
    assert!(mlp.parameters().iter().any(|p| p.grad() != 0.0));

    mlp.zero_grad();
    assert!(grads(&mlp.parameters()).iter().all(|g| *g == 0.0));
}

#[test]
fn test_mlp_input_gradients_match_finite_differences() {
    init_logging();
    let cfg = InitConfig::new(-0.5, 0.5).with_seed(7);
    let mlp = Mlp::with_config(2, &[3, 1], Activation::Tanh, &cfg).unwrap();
    let func = |x: &[Value]| mlp.forward_single(x);
    check_grad(func, &[0.3, -0.8], 1e-6, 1e-6, 1e-4).unwrap();
}

#[test]
fn test_squared_error_over_outputs() {
    init_logging();
    let layer = Layer::from_neurons(vec![
        Neuron::from_weights(&[1.0], 0.0, Activation::Linear),
        Neuron::from_weights(&[2.0], 0.0, Activation::Linear),
    ])
    .unwrap();
    let outputs = layer.forward(&inputs(&[1.5])).unwrap();
    let targets = [1.0, 2.0];
    let loss: Value = outputs
        .iter()
        .zip(targets)
        .map(|(y, t)| (y - t).pow(2.0))
        .sum();
    assert_relative_eq!(loss.data(), 0.25 + 1.0);

    loss.backward();
    // d/dw = 2 * (y - t) * x
    let named = layer.named_parameters();
    assert_eq!(named[0].0, "neurons.0.w0");
    assert_relative_eq!(named[0].1.grad(), 2.0 * 0.5 * 1.5);
    assert_eq!(named[2].0, "neurons.1.w0");
    assert_relative_eq!(named[2].1.grad(), 2.0 * 1.0 * 1.5);
}

#[test]
fn test_wrong_arity_is_reported() {
    init_logging();
    let mlp = Mlp::new(2, &[2, 1]).unwrap();
    assert_eq!(
        mlp.forward(&inputs(&[1.0, 2.0, 3.0])).unwrap_err(),
        ScalarGradError::DimensionMismatch {
            expected: 2,
            actual: 3
        }
    );
}

#[test]
fn test_export_of_neuron_graph() {
    init_logging();
    let neuron = Neuron::from_weights(&[0.5, -0.5], 0.1, Activation::Tanh);
    let out = neuron.forward(&inputs(&[1.0, 2.0])).unwrap().labeled("out");
    out.backward();

    let t = trace(&out);
    // 2 inputs, 3 params, 2 products, 2 sums, tanh
    assert_eq!(t.nodes.len(), 10);
    assert_eq!(t.edges.len(), 9);

    let dot = to_dot(&out, RankDir::LR);
    assert!(dot.contains("rankdir=LR;"));
    assert!(dot.contains("{ out | data "));
    assert!(dot.contains("[label=\"tanh\"]"));
    assert!(dot.contains("{ b | data 0.1000 | grad "));
    assert_eq!(dot.matches("shape=record").count(), 10);
}

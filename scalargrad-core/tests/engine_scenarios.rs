use approx::assert_relative_eq;
use scalargrad_core::autograd::graph::topological_order;
use scalargrad_core::nn::{Activation, Module, Neuron};
use scalargrad_core::utils::testing::{check_grads_near, check_value_near};
use scalargrad_core::Value;

mod common;
use common::{grads, init_logging, inputs};

#[test]
fn test_scalar_expression_gradients() {
    init_logging();
    let a = Value::with_label(2.0, "a");
    let b = Value::with_label(-3.0, "b");
    let c = Value::with_label(10.0, "c");
    let e = (&a * &b).labeled("e");
    let d = (&e + &c).labeled("d");
    let f = Value::with_label(-2.0, "f");
    let l = (&d * &f).labeled("L");

    l.backward();

    check_value_near(&l, -8.0, 1.0, 1e-12);
    check_value_near(&a, 2.0, 6.0, 1e-12);
    check_value_near(&b, -3.0, -4.0, 1e-12);
    check_value_near(&c, 10.0, -2.0, 1e-12);
    check_value_near(&f, -2.0, 4.0, 1e-12);
    check_value_near(&d, 4.0, -2.0, 1e-12);
    check_value_near(&e, -6.0, -2.0, 1e-12);
}

#[test]
fn test_tanh_neuron() {
    init_logging();
    let neuron = Neuron::from_weights(&[1.0, -1.0], 0.0, Activation::Tanh);
    let x = inputs(&[1.0, 1.0]);
    let out = neuron.forward(&x).unwrap();
    assert_relative_eq!(out.data(), 0.0);

    out.backward();
    let local = 1.0 - out.data().powi(2);
    for (w, xi) in neuron.weights().iter().zip(&x) {
        assert_relative_eq!(w.grad(), xi.data() * local);
    }
    check_grads_near(neuron.weights(), &[1.0, 1.0], 1e-12);
}

#[test]
fn test_double_backward_doubles_gradients() {
    init_logging();
    let a = Value::new(2.0);
    let b = Value::new(-3.0);
    let l = &a * &b;

    l.backward();
    let first = grads(&[a.clone(), b.clone()]);
    l.backward();
    let second = grads(&[a.clone(), b.clone()]);

    assert_eq!(second, vec![2.0 * first[0], 2.0 * first[1]]);
}

#[test]
fn test_zero_grad_between_passes_restores_gradients() {
    init_logging();
    let a = Value::new(2.0);
    let b = Value::new(-3.0);
    let l = &a * &b + &a;

    l.backward();
    let first = grads(&[a.clone(), b.clone()]);
    // Intermediate nodes accumulate too, so every node of the graph is reset.
    for node in topological_order(&l) {
        node.zero_grad();
    }
    l.backward();
    assert_eq!(grads(&[a, b]), first);
}

#[test]
fn test_module_zero_grad_then_fresh_forward_matches() {
    init_logging();
    let neuron = Neuron::from_weights(&[0.3, -0.7, 1.1], 0.2, Activation::Tanh);
    let x = [0.5, -1.5, 2.0];

    neuron.forward(&inputs(&x)).unwrap().backward();
    let first = grads(&neuron.parameters());

    neuron.forward(&inputs(&x)).unwrap().backward();
    let accumulated = grads(&neuron.parameters());
    for (acc, g) in accumulated.iter().zip(&first) {
        assert_relative_eq!(*acc, 2.0 * g, epsilon = 1e-12);
    }

    neuron.zero_grad();
    neuron.forward(&inputs(&x)).unwrap().backward();
    assert_eq!(grads(&neuron.parameters()), first);
}

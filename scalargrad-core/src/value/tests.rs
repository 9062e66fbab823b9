use crate::autograd::Op;
use crate::value::{labeled_leaves, leaves, Value};
use approx::assert_relative_eq;
use std::collections::HashSet;

#[test]
fn test_leaf_creation() {
    let a = Value::new(2.5);
    assert_eq!(a.data(), 2.5);
    assert_eq!(a.grad(), 0.0);
    assert!(a.is_leaf());
    assert_eq!(a.op(), Op::Leaf);
    assert_eq!(a.op_label(), "");
    assert!(a.operands().is_empty());
    assert_eq!(a.label(), None);
}

#[test]
fn test_labels() {
    let a = Value::with_label(1.0, "a");
    assert_eq!(a.label().as_deref(), Some("a"));
    let b = Value::new(2.0).labeled("b");
    assert_eq!(b.label().as_deref(), Some("b"));
    b.set_label("renamed");
    assert_eq!(b.label().as_deref(), Some("renamed"));
}

#[test]
fn test_from_numbers() {
    assert_eq!(Value::from(1.5_f64).data(), 1.5);
    assert_eq!(Value::from(0.5_f32).data(), 0.5);
    assert_eq!(Value::from(-3).data(), -3.0);
}

#[test]
fn test_leaves_helpers() {
    let xs = leaves(&[1.0, 2.0]);
    assert_eq!(xs.len(), 2);
    assert!(xs.iter().all(|x| x.label().is_none()));

    let ys = labeled_leaves(&[1.0, 2.0, 3.0], "x");
    let labels: Vec<String> = ys.iter().filter_map(|y| y.label()).collect();
    assert_eq!(labels, vec!["x0", "x1", "x2"]);
}

#[test]
fn test_identity_equality() {
    let a = Value::new(1.0);
    let b = Value::new(1.0);
    let a2 = a.clone();
    assert_ne!(a, b, "equal data must not make nodes equal");
    assert_eq!(a, a2, "clones share the node");
    assert_eq!(a.id(), a2.id());

    let set: HashSet<Value> = [a.clone(), b.clone(), a2].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_clone_shares_grad() {
    let a = Value::new(3.0);
    let alias = a.clone();
    let y = &a * 2.0;
    y.backward();
    assert_eq!(alias.grad(), 2.0);
}

#[test]
fn test_std_ops_all_forms() {
    let a = Value::new(3.0);
    let b = Value::new(2.0);
    assert_eq!((&a + &b).data(), 5.0);
    assert_eq!((a.clone() + b.clone()).data(), 5.0);
    assert_eq!((a.clone() + &b).data(), 5.0);
    assert_eq!((&a + b.clone()).data(), 5.0);
    assert_eq!((&a - &b).data(), 1.0);
    assert_eq!((&a * &b).data(), 6.0);
    assert_relative_eq!((&a / &b).data(), 1.5);
    assert_eq!((-&a).data(), -3.0);
    assert_eq!((-a.clone()).data(), -3.0);

    assert_eq!((&a + 1.0).data(), 4.0);
    assert_eq!((1.0 + &a).data(), 4.0);
    assert_eq!((&a - 1.0).data(), 2.0);
    assert_eq!((1.0 - &a).data(), -2.0);
    assert_eq!((&a * 2.0).data(), 6.0);
    assert_eq!((2.0 * a.clone()).data(), 6.0);
    assert_relative_eq!((&a / 2.0).data(), 1.5);
    assert_relative_eq!((6.0 / a.clone()).data(), 2.0);
}

#[test]
fn test_backward_on_leaf_sets_only_its_grad() {
    let a = Value::new(7.0);
    a.backward();
    assert_eq!(a.grad(), 1.0);
    assert_eq!(a.data(), 7.0);
}

#[test]
fn test_backward_reseeds_root() {
    let a = Value::new(2.0);
    let y = &a * 3.0;
    y.backward();
    y.backward();
    // Root is reset to 1 each pass; the operand accumulates.
    assert_eq!(y.grad(), 1.0);
    assert_eq!(a.grad(), 6.0);
}

#[test]
fn test_zero_grad() {
    let a = Value::new(2.0);
    let b = &a * &Value::new(3.0);
    b.backward();
    assert_eq!(a.grad(), 3.0);
    a.zero_grad();
    assert_eq!(a.grad(), 0.0);
}

#[test]
fn test_chain_compound() {
    // loss = (a * b + c).relu(); a=1, b=2, c=-1 => loss = 1
    let a = Value::new(1.0);
    let b = Value::new(2.0);
    let c = Value::new(-1.0);
    let loss = (&a * &b + &c).relu();
    assert_eq!(loss.data(), 1.0);
    loss.backward();
    assert_relative_eq!(a.grad(), 2.0);
    assert_relative_eq!(b.grad(), 1.0);
    assert_relative_eq!(c.grad(), 1.0);
}

#[test]
fn test_display_and_debug() {
    let a = Value::with_label(2.0, "a");
    assert_eq!(a.to_string(), "a: 2");
    assert_eq!(Value::new(0.5).to_string(), "0.5");
    let debug = format!("{:?}", &a * 2.0);
    assert!(debug.contains("op=\"*\""));
    assert!(debug.contains("operands=2"));
}

#[test]
fn test_dropping_long_chain() {
    let mut acc = Value::new(0.0);
    for _ in 0..100_000 {
        acc = acc + 1.0;
    }
    assert_eq!(acc.data(), 100_000.0);
    drop(acc);
}

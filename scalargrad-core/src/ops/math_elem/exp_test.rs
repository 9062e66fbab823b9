// scalargrad-core/src/ops/math_elem/exp_test.rs

use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckError};
use approx::assert_relative_eq;

#[test]
fn test_exp_forward() {
    let a = Value::new(1.0);
    let b = exp_op(&a);
    assert_relative_eq!(b.data(), std::f64::consts::E);
    assert_eq!(b.op(), Op::Exp);
    assert_eq!(b.op_label(), "exp");
}

#[test]
fn test_exp_backward() {
    let a = Value::new(1.0);
    let b = a.exp();
    b.backward();
    assert_relative_eq!(a.grad(), std::f64::consts::E);
}

#[test]
fn test_exp_chained() {
    // y = exp(2x) => dy/dx = 2 exp(2x)
    let x = Value::new(0.5);
    let y = (&x * 2.0).exp();
    y.backward();
    assert_relative_eq!(x.grad(), 2.0 * f64::exp(1.0), epsilon = 1e-12);
}

#[test]
fn test_exp_grad_check() -> Result<(), GradCheckError> {
    let func = |inputs: &[Value]| Ok(exp_op(&inputs[0]));
    check_grad(func, &[-1.1], 1e-6, 1e-6, 1e-4)
}

// scalargrad-core/src/ops/math_elem/exp.rs

use crate::autograd::Op;
use crate::value::Value;

/// Computes the natural exponential: `out = exp(a)`, recorded as `Op::Exp`.
///
/// Backward: `a.grad += out.data * out.grad` (the derivative of `exp` is itself).
pub fn exp_op(a: &Value) -> Value {
    Value::from_op(a.data().exp(), Op::Exp, vec![a.clone()])
}

impl Value {
    /// Applies `exp`. See [`exp_op`].
    pub fn exp(&self) -> Value {
        exp_op(self)
    }
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;

// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::autograd::Op;
use crate::value::Value;

// --- Forward Operation ---

/// Multiplies two values: `out = a * b`, recorded as an `Op::Mul` node over `[a, b]`.
///
/// Backward: `a.grad += b.data * out.grad`, `b.grad += a.data * out.grad`.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() * b.data(), Op::Mul, vec![a.clone(), b.clone()])
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;

// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::Op;
use crate::value::Value;

// --- Forward Operation ---

/// Adds two values: `out = a + b`, recorded as an `Op::Add` node over `[a, b]`.
///
/// Backward: `a.grad += out.grad`, `b.grad += out.grad`.
pub fn add_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() + b.data(), Op::Add, vec![a.clone(), b.clone()])
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;

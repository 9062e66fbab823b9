use crate::autograd::Op;
use crate::value::Value;

// --- Forward Operation ---

/// Applies the Rectified Linear Unit: `out = max(a, 0)`, recorded as `Op::ReLU`.
///
/// Backward: `a.grad += (out.data > 0 ? 1 : 0) * out.grad`. The kink at zero is
/// not differentiable; the gradient is blocked there.
pub fn relu_op(a: &Value) -> Value {
    let data = a.data();
    let out = if data > 0.0 { data } else { 0.0 };
    Value::from_op(out, Op::ReLU, vec![a.clone()])
}

impl Value {
    /// Applies ReLU. See [`relu_op`].
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;

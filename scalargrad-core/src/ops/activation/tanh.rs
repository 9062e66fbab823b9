use crate::autograd::Op;
use crate::value::Value;

// --- Forward Operation ---

/// Applies the hyperbolic tangent: `out = tanh(a)`, recorded as `Op::Tanh`.
///
/// Backward: `a.grad += (1 - out^2) * out.grad`, reusing the forward output.
///
/// The value equals `(exp(2x) - 1) / (exp(2x) + 1)`; `f64::tanh` is used
/// because that quotient is `inf / inf` (NaN) once `exp(2x)` overflows.
pub fn tanh_op(a: &Value) -> Value {
    Value::from_op(a.data().tanh(), Op::Tanh, vec![a.clone()])
}

impl Value {
    /// Applies tanh. See [`tanh_op`].
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;

// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::value::Value;

/// The exponent argument of [`pow_op`].
///
/// Only constant exponents are differentiable here. A graph node is accepted
/// by the type so that the mistake is reported as an error instead of being
/// silently coerced to its current value.
#[derive(Debug, Clone)]
pub enum Exponent {
    Constant(f64),
    Node(Value),
}

impl From<f64> for Exponent {
    fn from(exponent: f64) -> Self {
        Exponent::Constant(exponent)
    }
}

impl From<f32> for Exponent {
    fn from(exponent: f32) -> Self {
        Exponent::Constant(f64::from(exponent))
    }
}

impl From<i32> for Exponent {
    fn from(exponent: i32) -> Self {
        Exponent::Constant(f64::from(exponent))
    }
}

impl From<Value> for Exponent {
    fn from(node: Value) -> Self {
        Exponent::Node(node)
    }
}

impl From<&Value> for Exponent {
    fn from(node: &Value) -> Self {
        Exponent::Node(node.clone())
    }
}

// --- Forward Operation ---

/// Raises `base` to a constant power: `out = base ** p`, recorded as `Op::Pow(p)`.
///
/// Backward: `base.grad += p * base.data^(p - 1) * out.grad`.
///
/// # Errors
/// Returns `ScalarGradError::InvalidOperand` if the exponent is a graph node.
/// No node is created in that case.
pub fn pow_op(base: &Value, exponent: impl Into<Exponent>) -> Result<Value, ScalarGradError> {
    let exponent = match exponent.into() {
        Exponent::Constant(p) => p,
        Exponent::Node(node) => {
            return Err(ScalarGradError::InvalidOperand {
                operation: "pow".to_string(),
                reason: format!(
                    "only constant exponents are supported, got a graph node ({})",
                    node
                ),
            })
        }
    };
    Ok(pow_scalar(base, exponent))
}

/// Infallible core of [`pow_op`] for a known-constant exponent.
pub(crate) fn pow_scalar(base: &Value, exponent: f64) -> Value {
    Value::from_op(
        base.data().powf(exponent),
        Op::Pow(exponent),
        vec![base.clone()],
    )
}

// --- Value Methods ---

impl Value {
    /// Raises this value to a constant power.
    pub fn pow(&self, exponent: f64) -> Value {
        pow_scalar(self, exponent)
    }

    /// Fallible form of [`Value::pow`] accepting any [`Exponent`].
    pub fn try_pow(&self, exponent: impl Into<Exponent>) -> Result<Value, ScalarGradError> {
        pow_op(self, exponent)
    }
}

impl num_traits::Pow<f64> for &Value {
    type Output = Value;

    fn pow(self, exponent: f64) -> Value {
        pow_scalar(self, exponent)
    }
}

impl num_traits::Pow<f64> for Value {
    type Output = Value;

    fn pow(self, exponent: f64) -> Value {
        pow_scalar(&self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;

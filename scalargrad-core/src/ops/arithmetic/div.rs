// scalargrad-core/src/ops/arithmetic/div.rs

use crate::ops::arithmetic::mul_op;
use crate::ops::arithmetic::pow::pow_scalar;
use crate::value::Value;

/// Divides two values, defined as `a * b ** -1`.
///
/// There is no dedicated division rule. Dividing by a node whose value is `0.0`
/// is not intercepted: infinities and NaN propagate through the forward value
/// and the gradients as IEEE arithmetic dictates.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &pow_scalar(b, -1.0))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;

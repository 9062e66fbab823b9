// scalargrad-core/src/ops/arithmetic/sub.rs

use crate::ops::arithmetic::{add_op, neg_op};
use crate::value::Value;

/// Subtracts two values, defined as `a + (-b)`.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    add_op(a, &neg_op(b))
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;

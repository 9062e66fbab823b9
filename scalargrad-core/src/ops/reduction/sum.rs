// scalargrad-core/src/ops/reduction/sum.rs

use crate::ops::arithmetic::add_op;
use crate::value::Value;

/// Sums a slice of values with a left fold of `Add` nodes.
///
/// Each element must keep its own gradient path, so this builds `n - 1` add
/// nodes rather than a single n-ary node. An empty slice yields a `0.0` leaf,
/// and a single element is returned as is (no node is created).
pub fn sum_op(values: &[Value]) -> Value {
    match values.split_first() {
        None => Value::new(0.0),
        Some((first, rest)) => rest
            .iter()
            .fold(first.clone(), |acc, value| add_op(&acc, value)),
    }
}

impl std::iter::Sum for Value {
    fn sum<I: Iterator<Item = Value>>(iter: I) -> Self {
        let values: Vec<Value> = iter.collect();
        sum_op(&values)
    }
}

impl<'a> std::iter::Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Self {
        let values: Vec<Value> = iter.cloned().collect();
        sum_op(&values)
    }
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;

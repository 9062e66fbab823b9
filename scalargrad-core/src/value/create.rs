// src/value/create.rs

use crate::autograd::Op;
use crate::value::Value;
use crate::value_data::ValueData;

impl Value {
    /// Creates a leaf node (no operands, no label) holding `data`, with a zero gradient.
    pub fn new(data: f64) -> Self {
        Value::from_value_data(ValueData::leaf(data, None))
    }

    /// Creates a labelled leaf node. The label is only used for diagnostics and export.
    pub fn with_label(data: f64, label: impl Into<String>) -> Self {
        Value::from_value_data(ValueData::leaf(data, Some(label.into())))
    }

    /// Creates the result node of `op` applied to `operands`.
    ///
    /// Only the `ops` module calls this; it never runs any backward rule.
    pub(crate) fn from_op(data: f64, op: Op, operands: Vec<Value>) -> Self {
        Value::from_value_data(ValueData::from_op(data, op, operands))
    }
}

/// Lifts every number of `data` to an unlabelled leaf.
pub fn leaves(data: &[f64]) -> Vec<Value> {
    data.iter().map(|&x| Value::new(x)).collect()
}

/// Lifts every number of `data` to a leaf labelled `{prefix}{index}`.
///
/// ```
/// use scalargrad_core::value::labeled_leaves;
///
/// let xs = labeled_leaves(&[0.5, -1.0], "x");
/// assert_eq!(xs[1].label().as_deref(), Some("x1"));
/// ```
pub fn labeled_leaves(data: &[f64], prefix: &str) -> Vec<Value> {
    data.iter()
        .enumerate()
        .map(|(i, &x)| Value::with_label(x, format!("{prefix}{i}")))
        .collect()
}

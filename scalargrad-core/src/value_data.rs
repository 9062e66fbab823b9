// src/value_data.rs
use std::rc::Rc;

use crate::autograd::Op;
use crate::value::Value;

/// Internal storage of a single node in the computation graph.
///
/// This struct holds the forward value, the accumulated gradient and the
/// autograd metadata (operands and the operation that produced the node).
/// It is wrapped in `Rc<RefCell<ValueData>>` by [`Value`] so that the same
/// node can be the operand of many results while its gradient stays mutable.
#[derive(Debug)]
pub struct ValueData {
    /// Forward value. Set once at construction.
    pub(crate) data: f64,
    /// Accumulated gradient of the backward root with respect to this node.
    /// Starts at `0.0` and only grows by accumulation until reset.
    pub(crate) grad: f64,

    // --- Autograd Metadata ---
    /// Nodes consumed to produce `data`, in positional order (operand 0 is the
    /// left-hand side). The same node may appear more than once (`x * x`).
    /// Empty for leaves.
    pub(crate) operands: Vec<Value>,
    /// The operation that produced this node; selects the local backward rule.
    pub(crate) op: Op,

    /// Optional human-readable name, used only for diagnostics and export.
    pub(crate) label: Option<String>,
}

impl ValueData {
    /// Creates the storage of a leaf node: no operands, zero gradient.
    pub(crate) fn leaf(data: f64, label: Option<String>) -> Self {
        ValueData {
            data,
            grad: 0.0,
            operands: Vec::new(),
            op: Op::Leaf,
            label,
        }
    }

    /// Creates the storage of a node produced by `op` from `operands`.
    pub(crate) fn from_op(data: f64, op: Op, operands: Vec<Value>) -> Self {
        debug_assert_eq!(
            operands.len(),
            op.arity(),
            "operand count does not match the arity of {:?}",
            op
        );
        ValueData {
            data,
            grad: 0.0,
            operands,
            op,
            label: None,
        }
    }

    /// Returns `true` if this node was not produced by an operation.
    pub fn is_leaf(&self) -> bool {
        self.operands.is_empty()
    }
}

impl Drop for ValueData {
    /// Releases uniquely-owned operand chains iteratively. The default recursive
    /// drop would overflow the stack on long chains such as a running sum.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.operands);
        while let Some(operand) = pending.pop() {
            if let Ok(cell) = Rc::try_unwrap(operand.data) {
                let mut inner = cell.into_inner();
                pending.append(&mut inner.operands);
            }
        }
    }
}

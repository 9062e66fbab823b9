// src/value/accessors.rs
use crate::autograd::graph::NodeId;
use crate::autograd::Op;
use crate::value::Value;
use std::rc::Rc;

impl Value {
    /// Returns the forward value of the node.
    pub fn data(&self) -> f64 {
        self.borrow_value_data().data
    }

    /// Returns the gradient accumulated so far.
    pub fn grad(&self) -> f64 {
        self.borrow_value_data().grad
    }

    /// Returns the operation that produced this node (`Op::Leaf` for leaves).
    pub fn op(&self) -> Op {
        self.borrow_value_data().op
    }

    /// Returns the diagnostic label of the producing operation (`""` for leaves).
    pub fn op_label(&self) -> String {
        self.borrow_value_data().op.label()
    }

    /// Returns the operands of this node, in positional order.
    ///
    /// The returned handles share the underlying nodes; this is read-only
    /// inspection and never alters the graph.
    pub fn operands(&self) -> Vec<Value> {
        self.borrow_value_data().operands.clone()
    }

    /// Returns the human-readable label, if any.
    pub fn label(&self) -> Option<String> {
        self.borrow_value_data().label.clone()
    }

    /// Returns `true` if the node has no operands.
    pub fn is_leaf(&self) -> bool {
        self.borrow_value_data().is_leaf()
    }

    /// Returns the identity of the node, stable for its whole lifetime.
    pub fn id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    /// Sets the human-readable label in place.
    pub fn set_label(&self, label: impl Into<String>) {
        self.borrow_value_data_mut().label = Some(label.into());
    }

    /// Builder-style variant of [`Value::set_label`].
    pub fn labeled(self, label: impl Into<String>) -> Self {
        self.set_label(label);
        self
    }

    // --- Gradient mutation (crate-internal) ---

    pub(crate) fn set_grad(&self, grad: f64) {
        self.borrow_value_data_mut().grad = grad;
    }

    /// Accumulates `delta` into the gradient (`grad += delta`).
    pub(crate) fn add_grad(&self, delta: f64) {
        self.borrow_value_data_mut().grad += delta;
    }
}

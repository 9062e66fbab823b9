// src/value/autograd.rs

use crate::autograd::graph::topological_order;
use crate::value::Value;

impl Value {
    /// Computes the gradient of this node with respect to every node it depends on.
    ///
    /// The root gradient is seeded to `1.0` (d(root)/d(root)); every other
    /// reachable node **accumulates** its contribution (`grad += ...`). Gradients
    /// are not reset beforehand: zero them (e.g. with
    /// [`Module::zero_grad`](crate::nn::Module::zero_grad)) before a fresh pass
    /// if contributions from a previous pass are not wanted.
    ///
    /// Calling this on a leaf only sets the leaf's own gradient to `1.0`.
    pub fn backward(&self) {
        self.set_grad(1.0);

        let sorted = topological_order(self);
        log::debug!(
            "backward() from {:?}: {} node(s) scheduled",
            self.id(),
            sorted.len()
        );

        for node in &sorted {
            let guard = node.borrow_value_data();
            // Operands are distinct from `node` (the graph is acyclic), so the
            // mutable borrows taken by the rule never conflict with `guard`.
            guard.op.backward(guard.data, guard.grad, &guard.operands);
        }
    }

    /// Resets the gradient of this node to `0.0`.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }
}

use crate::autograd::graph::{topological_order, NodeId};
use crate::value::Value;
use std::collections::HashSet;

/// Nodes and edges reachable from a root.
#[derive(Debug, Clone)]
pub struct Trace {
    /// Every reachable node, root first.
    pub nodes: Vec<Value>,
    /// `(operand, result)` pairs, one per distinct operand of each result.
    pub edges: Vec<(Value, Value)>,
}

impl Trace {
    /// Position of `node` in [`Trace::nodes`], if it was reached.
    pub fn index_of(&self, node: &Value) -> Option<usize> {
        self.nodes.iter().position(|n| n == node)
    }
}

/// Walks the graph below `root` without touching any data or gradient.
///
/// An operand used twice by the same result (`x * x`) yields a single edge.
pub fn trace(root: &Value) -> Trace {
    let nodes = topological_order(root);
    let mut seen: HashSet<(NodeId, NodeId)> = HashSet::new();
    let mut edges = Vec::new();
    for result in &nodes {
        for operand in result.operands() {
            if seen.insert((operand.id(), result.id())) {
                edges.push((operand, result.clone()));
            }
        }
    }
    Trace { nodes, edges }
}

#[cfg(test)]
#[path = "trace_test.rs"]
mod tests;

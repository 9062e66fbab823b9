use crate::value::Value;
use crate::value_data::ValueData;
use std::cell::RefCell;
use std::collections::HashSet;

/// Identity of a node: the address of its shared cell.
///
/// Stable for the lifetime of the node, independent of how many `Value`
/// handles point at it, which makes it a suitable key for visited-sets.
pub type NodeId = *const RefCell<ValueData>;

/// Depth-first post-order walk of the graph below `node`.
///
/// Appends every not-yet-visited node reachable from `node` to `sorted_list`,
/// each one after all of its operands. `visited` is keyed by identity so shared
/// subgraphs are walked once. Uses an explicit stack rather than recursion so
/// long chains (e.g. a sum over many inputs) cannot overflow the call stack.
pub(crate) fn build_topo(
    node: &Value,
    visited: &mut HashSet<NodeId>,
    sorted_list: &mut Vec<Value>,
) {
    // (node, operands_pushed)
    let mut stack: Vec<(Value, bool)> = vec![(node.clone(), false)];

    while let Some((current, operands_pushed)) = stack.pop() {
        if operands_pushed {
            sorted_list.push(current);
            continue;
        }
        if !visited.insert(current.id()) {
            log::trace!("[build_topo] {:?} already visited", current.id());
            continue;
        }
        log::trace!("[build_topo] visiting {:?} ({})", current.id(), current.op_label());

        let operands = current.operands();
        stack.push((current, true));
        // Reversed so operands are walked in positional order.
        for operand in operands.into_iter().rev() {
            if !visited.contains(&operand.id()) {
                stack.push((operand, false));
            }
        }
    }
}

/// Returns every node reachable from `root`, ordered for reverse-mode accumulation.
///
/// The order is the reversed post-order of a depth-first walk: `root` comes
/// first, pure leaves last, and every consumer precedes each of its operands.
/// Running the backward rules in this order guarantees that a node's gradient
/// already holds the contributions of all its consumers when its own rule runs.
pub fn topological_order(root: &Value) -> Vec<Value> {
    let mut visited = HashSet::new();
    let mut sorted_list = Vec::new();
    build_topo(root, &mut visited, &mut sorted_list);
    sorted_list.reverse();
    sorted_list
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;

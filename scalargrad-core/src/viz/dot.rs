use crate::value::Value;
use crate::viz::trace::trace;
use std::fmt::Write;

/// Layout direction of the exported graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankDir {
    /// Left to right.
    #[default]
    LR,
    /// Top to bottom.
    TB,
}

impl RankDir {
    pub fn as_str(&self) -> &'static str {
        match self {
            RankDir::LR => "LR",
            RankDir::TB => "TB",
        }
    }
}

/// Renders the graph below `root` as a Graphviz DOT digraph.
///
/// Each value becomes a `record` node `{ label | data x | grad g }`. A value
/// produced by an operation gets an extra op node, wired as
/// `operand -> op -> value`. Node names are positional (`n0` is `root`), so the
/// output is deterministic for a given graph.
pub fn to_dot(root: &Value, rankdir: RankDir) -> String {
    let t = trace(root);
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "digraph {{");
    let _ = writeln!(out, "  rankdir={};", rankdir.as_str());

    for (i, node) in t.nodes.iter().enumerate() {
        let label = node.label().unwrap_or_default();
        let _ = writeln!(
            out,
            "  n{} [shape=record, label=\"{{ {} | data {:.4} | grad {:.4} }}\"];",
            i,
            escape_record(&label),
            node.data(),
            node.grad()
        );
        if !node.is_leaf() {
            let _ = writeln!(
                out,
                "  n{}_op [label=\"{}\"];",
                i,
                escape_record(&node.op_label())
            );
            let _ = writeln!(out, "  n{}_op -> n{};", i, i);
        }
    }

    for (operand, result) in &t.edges {
        if let (Some(from), Some(to)) = (t.index_of(operand), t.index_of(result)) {
            let _ = writeln!(out, "  n{} -> n{}_op;", from, to);
        }
    }

    out.push_str("}\n");
    out
}

/// Escapes characters with a meaning inside DOT record labels.
fn escape_record(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '{' | '}' | '|' | '<' | '>' | '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
#[path = "dot_test.rs"]
mod tests;

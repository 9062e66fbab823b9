// src/viz/mod.rs
// Read-only inspection of a computation graph and Graphviz DOT export.

pub mod dot;
pub mod trace;

pub use dot::{to_dot, RankDir};
pub use trace::{trace, Trace};

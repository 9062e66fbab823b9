//! # Autograd
//!
//! Reverse-mode differentiation over the scalar graph built by [`crate::ops`].
//!
//! - [`backward_op`]: the [`Op`] tag stored on every node, and the local
//!   derivative rule each tag dispatches to.
//! - [`graph`]: node identity and the topological scheduler used by
//!   [`Value::backward`](crate::value::Value::backward).
//! - [`grad_check`]: finite-difference verification of analytical gradients.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::Op;

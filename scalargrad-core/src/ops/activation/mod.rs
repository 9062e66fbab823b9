//! # Activation Functions
//!
//! Non-linearities applied to a single value.
//!
//! ## Currently Implemented:
//! - [`ReLU`](relu/fn.relu_op.html): Rectified Linear Unit.
//! - [`Tanh`](tanh/fn.tanh_op.html): hyperbolic tangent.

pub mod relu;
pub mod tanh;

// Re-export key functions
pub use relu::relu_op;
pub use tanh::tanh_op;

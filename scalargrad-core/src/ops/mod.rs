//! # Graph Builder (`ops`)
//!
//! Every operation that combines [`Value`](crate::value::Value)s lives here.
//! Each one computes the forward value eagerly and returns exactly one new node
//! recording its operands and the [`Op`](crate::autograd::Op) tag that selects
//! its backward rule. No gradient is computed at construction time.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** the core function of an operation (e.g. `add_op`),
//!   taking operands by reference.
//! - **Methods / std::ops:** `Value` methods (`relu`, `tanh`, `exp`, `pow`) and the
//!   operator overloads in `value::arithmetic_ops` forward to the `_op` functions.
//!   Raw `f64` operands are lifted to leaves before the call.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, mul, pow, and the derived neg, sub, div.
//! - [`activation`]: relu, tanh.
//! - [`math_elem`]: exp.
//! - [`reduction`]: sum over a slice of values.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
pub mod reduction;

pub use activation::{relu_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op, Exponent};
pub use math_elem::exp_op;
pub use reduction::sum_op;

//! Scalar reverse-mode automatic differentiation with a small neural-network
//! layer on top.
//!
//! Every [`Value`] is one node of a dynamically built computation graph. Running
//! [`Value::backward`] on a result fills in the gradient of that result with
//! respect to every node it depends on.

pub mod autograd;
pub mod error;
pub mod nn;
pub mod ops;
pub mod utils;
pub mod value;
pub mod value_data;
pub mod viz;

pub use autograd::Op;
pub use error::ScalarGradError;
pub use value::Value;
// Re-export traits required by public functions/structs
pub use num_traits;

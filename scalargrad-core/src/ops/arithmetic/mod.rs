// Foundational arithmetic operations. Only add, mul and pow create their own
// node kind; neg, sub and div are compositions of them.
pub mod add;
pub mod div;
pub mod mul;
pub mod neg;
pub mod pow;
pub mod sub;

pub use add::add_op;
pub use div::div_op;
pub use mul::mul_op;
pub use neg::neg_op;
pub use pow::{pow_op, Exponent};
pub use sub::sub_op;

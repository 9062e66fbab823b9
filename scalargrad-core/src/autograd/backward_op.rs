use crate::value::Value;

/// The operation that produced a node.
///
/// Every non-leaf node stores one of these tags instead of a closure. The tag
/// selects the closed-form local derivative applied by [`Op::backward`], so all
/// chain-rule logic lives in this one place.
///
/// Derived operations (negation, subtraction, division) have no tag of their
/// own: they are built from `Add`, `Mul` and `Pow` nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// A node created directly by the user (input, weight, bias, constant).
    Leaf,
    Add,
    Mul,
    /// Power with a constant exponent.
    Pow(f64),
    ReLU,
    Tanh,
    Exp,
}

impl Op {
    /// Number of operands a node produced by this operation holds.
    pub fn arity(&self) -> usize {
        match self {
            Op::Leaf => 0,
            Op::Add | Op::Mul => 2,
            Op::Pow(_) | Op::ReLU | Op::Tanh | Op::Exp => 1,
        }
    }

    /// Diagnostic label (`""` for leaves). Never used for gradient logic.
    pub fn label(&self) -> String {
        match self {
            Op::Leaf => String::new(),
            Op::Add => "+".to_string(),
            Op::Mul => "*".to_string(),
            Op::Pow(exponent) => format!("**{}", exponent),
            Op::ReLU => "ReLU".to_string(),
            Op::Tanh => "tanh".to_string(),
            Op::Exp => "exp".to_string(),
        }
    }

    /// Runs the local backward rule of a node.
    ///
    /// Given the node's forward value `out_data`, its accumulated gradient
    /// `out_grad` and its `operands`, accumulates
    /// \\( \frac{\partial out}{\partial operand_i} \cdot out\_grad \\) into the
    /// gradient of each operand. Operand values are read before any gradient
    /// is written, so a node used twice (`x * x`) receives both contributions.
    pub(crate) fn backward(&self, out_data: f64, out_grad: f64, operands: &[Value]) {
        match (self, operands) {
            (Op::Leaf, []) => {}
            (Op::Add, [a, b]) => {
                a.add_grad(out_grad);
                b.add_grad(out_grad);
            }
            (Op::Mul, [a, b]) => {
                let (a_data, b_data) = (a.data(), b.data());
                a.add_grad(b_data * out_grad);
                b.add_grad(a_data * out_grad);
            }
            (Op::Pow(exponent), [a]) => {
                let local = exponent * a.data().powf(exponent - 1.0);
                a.add_grad(local * out_grad);
            }
            (Op::ReLU, [a]) => {
                // Not differentiable at 0; the gradient is blocked there.
                let local = if out_data > 0.0 { 1.0 } else { 0.0 };
                a.add_grad(local * out_grad);
            }
            (Op::Tanh, [a]) => {
                a.add_grad((1.0 - out_data * out_data) * out_grad);
            }
            (Op::Exp, [a]) => {
                a.add_grad(out_data * out_grad);
            }
            (op, operands) => unreachable!(
                "{:?} node built with {} operand(s), expected {}",
                op,
                operands.len(),
                op.arity()
            ),
        }
    }
}

#[cfg(test)]
#[path = "backward_op_test.rs"]
mod tests;

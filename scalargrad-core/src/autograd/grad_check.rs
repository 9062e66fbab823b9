use crate::error::ScalarGradError;
use crate::value::{leaves, Value};
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Checks analytical gradients against numerical gradients using central finite differences.
///
/// `func` builds an expression from leaves holding `inputs`. It is called once
/// to obtain the analytical gradients through [`Value::backward`], then twice per
/// input on fresh leaves shifted by `±epsilon`:
/// \\[ \frac{f(x_i + \epsilon) - f(x_i - \epsilon)}{2\epsilon} \\]
///
/// Each pair is compared with `abs_tol` as the absolute and `rel_tol` as the
/// relative tolerance; the first disagreement is returned as
/// [`GradCheckError::GradientMismatch`].
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    abs_tol: f64,
    rel_tol: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    // --- 1. Analytical gradients ---
    let input_leaves = leaves(inputs);
    let output = func(&input_leaves)?;
    output.backward();

    // --- 2. Numerical gradients, one input at a time ---
    for (input_index, leaf) in input_leaves.iter().enumerate() {
        let analytical_grad = leaf.grad();
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let mut shifted = inputs.to_vec();
        shifted[input_index] = inputs[input_index] + epsilon;
        let loss_plus = func(&leaves(&shifted))?.data();
        shifted[input_index] = inputs[input_index] - epsilon;
        let loss_minus = func(&leaves(&shifted))?.data();

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = abs_tol,
            max_relative = rel_tol
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    log::debug!("check_grad: {} input(s) verified", inputs.len());
    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;

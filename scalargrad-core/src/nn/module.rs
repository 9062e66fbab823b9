use crate::error::ScalarGradError;
use crate::value::Value;

/// The base trait for all network components (neurons, layers, perceptrons).
///
/// Parameters are plain [`Value`] leaves owned by the module. Handles returned by
/// [`Module::parameters`] share their node with the module, so gradients written
/// by a backward pass are visible through them.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass over `inputs`, one output per unit.
    ///
    /// # Errors
    /// Returns [`ScalarGradError::DimensionMismatch`] if `inputs` does not hold the
    /// number of values the module was built for.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError>;

    /// Returns every learnable parameter, sub-modules included, in a stable order.
    fn parameters(&self) -> Vec<Value>;

    /// Returns every learnable parameter along with a hierarchical name
    /// (e.g. `"layers.0.neurons.1.w0"`). Order matches [`Module::parameters`].
    fn named_parameters(&self) -> Vec<(String, Value)>;

    /// Resets the gradient of every parameter to zero.
    ///
    /// Gradients accumulate across backward passes; call this between two
    /// passes that should not see each other's contributions.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    /// Total number of scalar parameters.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}

/// Prefixes the names of a child's parameters with `"{prefix}.{index}."`.
pub(crate) fn prefixed(
    prefix: &str,
    index: usize,
    named: Vec<(String, Value)>,
) -> Vec<(String, Value)> {
    named
        .into_iter()
        .map(|(name, param)| (format!("{}.{}.{}", prefix, index, name), param))
        .collect()
}

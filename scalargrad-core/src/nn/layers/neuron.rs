use crate::error::ScalarGradError;
use crate::nn::init::{bias_leaf, weight_leaves, InitConfig};
use crate::nn::layers::Activation;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;
use rand_distr::Uniform;

/// A single unit computing `act(Σ x_i * w_i + b)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron over `n_inputs` inputs with weights and bias drawn from
    /// `U[-1, 1]`.
    pub fn new(n_inputs: usize, activation: Activation) -> Self {
        let dist = Uniform::new_inclusive(-1.0, 1.0);
        let mut rng = rand::thread_rng();
        Self::sample(n_inputs, activation, &dist, &mut rng)
    }

    /// Creates a neuron whose parameters are drawn from `config`'s range using
    /// the caller's generator.
    ///
    /// # Errors
    /// Returns [`ScalarGradError::InvalidConfiguration`] if the range is invalid.
    pub fn with_rng<R: Rng + ?Sized>(
        n_inputs: usize,
        activation: Activation,
        config: &InitConfig,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        let dist = config.distribution()?;
        Ok(Self::sample(n_inputs, activation, &dist, rng))
    }

    /// Creates a neuron with fixed parameters.
    pub fn from_weights(weights: &[f64], bias: f64, activation: Activation) -> Self {
        let weights = weights
            .iter()
            .enumerate()
            .map(|(i, &w)| Value::with_label(w, format!("w{}", i)))
            .collect();
        Neuron {
            weights,
            bias: Value::with_label(bias, "b"),
            activation,
        }
    }

    pub(crate) fn sample<R: Rng + ?Sized>(
        n_inputs: usize,
        activation: Activation,
        dist: &Uniform<f64>,
        rng: &mut R,
    ) -> Self {
        let weights = weight_leaves(n_inputs, dist, rng);
        let bias = bias_leaf(dist, rng);
        Neuron {
            weights,
            bias,
            activation,
        }
    }

    /// Builds the expression `act(b + w_0 * x_0 + w_1 * x_1 + ...)`.
    ///
    /// # Errors
    /// Returns [`ScalarGradError::DimensionMismatch`] if `inputs.len()` differs
    /// from the number of weights.
    pub fn forward(&self, inputs: &[Value]) -> Result<Value, ScalarGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::DimensionMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        let products = self.weights.iter().zip(inputs).map(|(w, x)| w * x);
        let pre_activation: Value = std::iter::once(self.bias.clone()).chain(products).sum();
        Ok(self.activation.apply(&pre_activation))
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn n_inputs(&self) -> usize {
        self.weights.len()
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        Neuron::forward(self, inputs).map(|out| vec![out])
    }

    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut named: Vec<(String, Value)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("w{}", i), w.clone()))
            .collect();
        named.push(("b".to_string(), self.bias.clone()));
        named
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;

use crate::error::ScalarGradError;
use crate::nn::init::InitConfig;
use crate::nn::layers::{Activation, Neuron};
use crate::nn::module::{prefixed, Module};
use crate::value::Value;
use rand::Rng;

/// `n_out` independent neurons reading the same inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    in_features: usize,
}

impl Layer {
    /// Creates a layer of `n_out` neurons over `n_in` inputs, parameters drawn
    /// from `U[-1, 1]`.
    pub fn new(n_in: usize, n_out: usize, activation: Activation) -> Self {
        let neurons = (0..n_out).map(|_| Neuron::new(n_in, activation)).collect();
        log::debug!("Layer::new: {} -> {} ({:?})", n_in, n_out, activation);
        Layer {
            neurons,
            in_features: n_in,
        }
    }

    /// Creates a layer whose parameters are drawn from `config`'s range using
    /// the caller's generator.
    pub fn with_rng<R: Rng + ?Sized>(
        n_in: usize,
        n_out: usize,
        activation: Activation,
        config: &InitConfig,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        let dist = config.distribution()?;
        let neurons = (0..n_out)
            .map(|_| Neuron::sample(n_in, activation, &dist, rng))
            .collect();
        log::debug!("Layer::with_rng: {} -> {} ({:?})", n_in, n_out, activation);
        Ok(Layer {
            neurons,
            in_features: n_in,
        })
    }

    /// Builds a layer from existing neurons.
    ///
    /// # Errors
    /// Returns [`ScalarGradError::DimensionMismatch`] if the neurons do not all
    /// read the same number of inputs.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, ScalarGradError> {
        let in_features = neurons.first().map_or(0, Neuron::n_inputs);
        if let Some(odd) = neurons.iter().find(|n| n.n_inputs() != in_features) {
            return Err(ScalarGradError::DimensionMismatch {
                expected: in_features,
                actual: odd.n_inputs(),
            });
        }
        Ok(Layer {
            neurons,
            in_features,
        })
    }

    /// Applies every neuron to `inputs`, one output per neuron.
    pub fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        if inputs.len() != self.in_features {
            return Err(ScalarGradError::DimensionMismatch {
                expected: self.in_features,
                actual: inputs.len(),
            });
        }
        self.neurons.iter().map(|n| n.forward(inputs)).collect()
    }

    /// Forward pass of a single-output layer, returning the output unwrapped.
    ///
    /// # Errors
    /// Returns [`ScalarGradError::DimensionMismatch`] if the layer has more or
    /// fewer than one neuron.
    pub fn forward_single(&self, inputs: &[Value]) -> Result<Value, ScalarGradError> {
        single(self.forward(inputs)?)
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.neurons.len()
    }
}

/// Unwraps a one-element output vector.
pub(crate) fn single(mut outputs: Vec<Value>) -> Result<Value, ScalarGradError> {
    if outputs.len() != 1 {
        return Err(ScalarGradError::DimensionMismatch {
            expected: 1,
            actual: outputs.len(),
        });
    }
    outputs.pop().ok_or(ScalarGradError::DimensionMismatch {
        expected: 1,
        actual: 0,
    })
}

impl Module for Layer {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        Layer::forward(self, inputs)
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, n)| prefixed("neurons", i, n.named_parameters()))
            .collect()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;

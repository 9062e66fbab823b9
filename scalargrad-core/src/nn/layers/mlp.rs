use crate::error::ScalarGradError;
use crate::nn::init::InitConfig;
use crate::nn::layers::layer::single;
use crate::nn::layers::{Activation, Layer};
use crate::nn::module::{prefixed, Module};
use crate::value::{labeled_leaves, Value};

/// A multi-layer perceptron: a stack of [`Layer`]s.
///
/// Hidden layers apply the configured non-linearity; the last layer is always
/// [`Activation::Linear`] so outputs are unbounded.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates an MLP over `n_in` inputs with one layer per entry of
    /// `layer_sizes`, Tanh hidden layers and default initialisation.
    ///
    /// # Errors
    /// Returns [`ScalarGradError::InvalidConfiguration`] if `layer_sizes` is empty.
    pub fn new(n_in: usize, layer_sizes: &[usize]) -> Result<Self, ScalarGradError> {
        Self::with_config(n_in, layer_sizes, Activation::Tanh, &InitConfig::default())
    }

    /// Creates an MLP with an explicit hidden non-linearity and initialisation.
    ///
    /// # Errors
    /// Returns [`ScalarGradError::InvalidConfiguration`] if `layer_sizes` is empty
    /// or the init range is invalid.
    pub fn with_config(
        n_in: usize,
        layer_sizes: &[usize],
        hidden_activation: Activation,
        config: &InitConfig,
    ) -> Result<Self, ScalarGradError> {
        if layer_sizes.is_empty() {
            return Err(ScalarGradError::InvalidConfiguration(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        config.validate()?;

        let mut rng = config.rng();
        let last = layer_sizes.len() - 1;
        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut fan_in = n_in;
        for (i, &n_out) in layer_sizes.iter().enumerate() {
            let activation = if i == last {
                Activation::Linear
            } else {
                hidden_activation
            };
            layers.push(Layer::with_rng(fan_in, n_out, activation, config, &mut rng)?);
            fan_in = n_out;
        }

        let mlp = Mlp { layers };
        log::debug!(
            "Mlp: {} inputs, layers {:?}, {} parameters",
            n_in,
            layer_sizes,
            mlp.num_parameters()
        );
        Ok(mlp)
    }

    /// Builds an MLP from existing layers, checking that consecutive sizes agree.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, ScalarGradError> {
        if layers.is_empty() {
            return Err(ScalarGradError::InvalidConfiguration(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        for pair in layers.windows(2) {
            if pair[0].out_features() != pair[1].in_features() {
                return Err(ScalarGradError::DimensionMismatch {
                    expected: pair[0].out_features(),
                    actual: pair[1].in_features(),
                });
            }
        }
        Ok(Mlp { layers })
    }

    /// Feeds `inputs` through every layer in turn.
    pub fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        let mut activations = inputs.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations)?;
        }
        Ok(activations)
    }

    /// Lifts raw numbers to leaves labelled `x0`, `x1`, ... and runs
    /// [`Mlp::forward`].
    pub fn forward_raw(&self, inputs: &[f64]) -> Result<Vec<Value>, ScalarGradError> {
        self.forward(&labeled_leaves(inputs, "x"))
    }

    /// Forward pass of a single-output network, returning the output unwrapped.
    pub fn forward_single(&self, inputs: &[Value]) -> Result<Value, ScalarGradError> {
        single(self.forward(inputs)?)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        Mlp::forward(self, inputs)
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, l)| prefixed("layers", i, l.named_parameters()))
            .collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;

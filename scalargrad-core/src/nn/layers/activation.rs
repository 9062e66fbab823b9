use crate::value::Value;

/// Non-linearity applied to a neuron's pre-activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Tanh,
    ReLU,
    /// Identity: the pre-activation is returned unchanged.
    Linear,
}

impl Activation {
    pub fn apply(&self, x: &Value) -> Value {
        match self {
            Activation::Tanh => x.tanh(),
            Activation::ReLU => x.relu(),
            Activation::Linear => x.clone(),
        }
    }
}

// src/nn/mod.rs
// Neurons, layers and multi-layer perceptrons built from scalar `Value`s.

pub mod init;
pub mod layers;
pub mod module; // Trait Module

// Re-export common items
pub use init::InitConfig;
pub use layers::{Activation, Layer, Mlp, Neuron};
pub use module::Module;

use thiserror::Error;

/// Custom error type for the scalargrad engine and its module layer.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    /// An operation received an operand it cannot accept, e.g. a graph node
    /// as the exponent of `pow`. No node is created when this is returned.
    #[error("Invalid operand for operation '{operation}': {reason}")]
    InvalidOperand { operation: String, reason: String },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

//! Error types for the pricing core

use thiserror::Error;

/// Errors that can occur in the pricing core
#[derive(Error, Debug)]
pub enum PricingError {
    /// A categorical value was not found in the fitted vocabulary
    #[error("unknown category `{value}` (expected one of: {expected})")]
    UnknownCategory { value: String, expected: String },

    /// A fabric key was not found in the taxonomy
    #[error("unknown fabric `{0}`")]
    UnknownFabric(String),

    /// A feature vector had the wrong number of columns
    #[error("feature dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The artifact bundle failed structural validation
    #[error("malformed artifact bundle: {0}")]
    MalformedBundle(String),

    /// A prediction pipeline failure, normalized to a single user-facing message
    #[error("prediction error: {0}")]
    Prediction(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for pricing core operations
pub type Result<T> = std::result::Result<T, PricingError>;

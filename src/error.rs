//! Error types for the Aer adapter.

use thiserror::Error;

/// Result type for adapter operations.
pub type AerResult<T> = Result<T, AerError>;

/// Errors that can occur while configuring an Aer simulator.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AerError {
    /// An option key is not in the recognized set.
    #[error("Unknown option `{0}` for the Aer simulator")]
    UnrecognizedOption(String),

    /// Mutually exclusive options were both supplied.
    #[error("noise_model and noise_model_backend are mutually exclusive")]
    ConflictingOptions,

    /// The simulation engine rejected the construction arguments.
    #[error("Simulator construction failed: {0}")]
    Construction(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

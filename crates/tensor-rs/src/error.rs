//! Typed error contract shared by shapes, buffers, tensors, and runtimes.

use thiserror::Error;

/// Result alias used throughout the tensor contract.
pub type TensorResult<T> = Result<T, TensorError>;

/// Failure modes surfaced by the tensor contract.
#[derive(Debug, Error)]
pub enum TensorError {
    /// The caller supplied data or metadata that can never describe a valid
    /// tensor. Raised before any runtime allocation takes place.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A shape-aware index referenced a position outside the array.
    #[error("index {index:?} is out of bounds for dimensions {dims:?}")]
    IndexOutOfBounds { index: Vec<usize>, dims: Vec<usize> },

    /// No descriptor is registered for the requested dtype code.
    #[error("unknown dtype code {code}")]
    UnknownDType { code: u32 },

    /// The requested allocation runtime has not been registered.
    #[error("runtime '{name}' is not registered (available: {available:?})")]
    RuntimeUnavailable { name: String, available: Vec<String> },

    /// The runtime failed to produce backing storage.
    #[error("allocation failure: {message}")]
    Allocation { message: String },
}

impl TensorError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        TensorError::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn allocation(message: impl Into<String>) -> Self {
        TensorError::Allocation {
            message: message.into(),
        }
    }
}

//! Error types for diff operations.

use thiserror::Error;

/// Errors that abort a diff.
///
/// None of these are recoverable: a diff either completes with a full
/// [`DiffResult`](crate::DiffResult) or returns one of these and no partial
/// result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiffError {
    /// The two instances handed to a type-erased entry point are not of the
    /// requested shape.
    #[error("shape mismatch: expected {expected}, found {found}")]
    ShapeMismatch {
        expected: &'static str,
        found: String,
    },

    /// Two traversal paths produced the same key. This is a defect in the
    /// shape description (for example two fields renamed to the same name),
    /// never a condition to merge over.
    #[error("duplicate change path: {path}")]
    DuplicatePath { path: String },

    /// Nesting went deeper than the configured `max_depth`.
    #[error("maximum nesting depth {limit} exceeded at {path:?}")]
    DepthExceeded { path: String, limit: usize },

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A result could not be serialized for output.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result alias for diff operations.
pub type Result<T, E = DiffError> = std::result::Result<T, E>;

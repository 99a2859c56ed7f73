//! Error types for the memory subsystem.

use serde_json::Error as SerdeError;
use thiserror::Error;

/// Errors emitted by memory components.
#[derive(Debug, Error)]
pub enum MemoryError {
    /// Underlying I/O failure while reading a memory snapshot.
    #[error("i/o error: {source}")]
    Io {
        /// Source [`std::io::Error`].
        #[from]
        source: std::io::Error,
    },
    /// Serialization or deserialization error.
    #[error("serialization error: {source}")]
    Serialization {
        /// Source [`serde_json::Error`].
        #[from]
        source: SerdeError,
    },
    /// Memory store backend reported an application error.
    #[error("memory store error: {reason}")]
    Store {
        /// Human-readable reason describing the failure.
        reason: String,
    },
    /// Two embeddings compared against each other have different lengths.
    #[error("embedding dimension mismatch: {left} vs {right}")]
    DimensionMismatch {
        /// Dimensionality of the left-hand embedding.
        left: usize,
        /// Dimensionality of the right-hand embedding.
        right: usize,
    },
    /// Memory record failed validation.
    #[error("invalid memory record: {0}")]
    InvalidRecord(&'static str),
}

impl MemoryError {
    /// Helper to construct store errors from string-like values.
    #[must_use]
    pub fn store(reason: impl Into<String>) -> Self {
        Self::Store {
            reason: reason.into(),
        }
    }
}

/// Result type alias for memory operations.
pub type MemoryResult<T> = Result<T, MemoryError>;

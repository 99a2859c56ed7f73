//! Error types for the social graph and recommendation engine.

use agent_memory::MemoryError;
use thiserror::Error;

/// Errors emitted by social graph components.
#[derive(Debug, Error)]
pub enum SocialError {
    /// Memory lookup or embedding comparison failed.
    #[error("memory error: {source}")]
    Memory {
        /// Source [`MemoryError`].
        #[from]
        source: MemoryError,
    },
    /// Follow import file could not be parsed.
    #[error("csv error: {source}")]
    Csv {
        /// Source [`csv::Error`].
        #[from]
        source: csv::Error,
    },
    /// Underlying I/O failure while opening an import file.
    #[error("i/o error: {source}")]
    Io {
        /// Source [`std::io::Error`].
        #[from]
        source: std::io::Error,
    },
    /// The supplied configuration was invalid.
    #[error("invalid social configuration: {0}")]
    InvalidConfig(&'static str),
    /// The referenced agent is not part of the roster.
    #[error("agent `{0}` is not part of the roster")]
    UnknownAgent(String),
}

/// Result type alias for social graph operations.
pub type SocialResult<T> = Result<T, SocialError>;

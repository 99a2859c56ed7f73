//! Shared error definitions for agent primitives.

use thiserror::Error;
use uuid::Error as UuidError;

use crate::AgentId;

/// Result alias used throughout the agent primitives.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building agents or rosters.
#[derive(Debug, Error)]
pub enum Error {
    /// The provided agent identifier could not be parsed.
    #[error("invalid agent id: {source}")]
    InvalidAgentId {
        /// Source parsing error from the UUID library.
        #[from]
        source: UuidError,
    },

    /// Agent definition failed validation.
    #[error("invalid agent: {reason}")]
    InvalidAgent {
        /// Human-readable reason for rejection.
        reason: String,
    },

    /// The roster already holds an agent with this identity.
    #[error("agent `{name}` ({id}) is already part of the roster")]
    DuplicateAgent {
        /// Identity of the rejected agent.
        id: AgentId,
        /// Display name of the rejected agent.
        name: String,
    },
}

//! Core shared types for agents taking part in the follow graph.

#![warn(missing_docs, clippy::pedantic)]

mod agent;
mod error;
mod ids;
mod roster;

/// Identity plus display name of a graph participant.
pub use agent::Agent;
/// Error type and result alias shared across the workspace.
pub use error::{Error, Result};
/// Unique identifier for agents.
pub use ids::AgentId;
/// Ordered agent directory.
pub use roster::AgentRoster;

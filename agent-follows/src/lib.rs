//! Follow graphs and memory-based follow suggestions for agents.
//!
//! Depend on this crate via `cargo add agent-follows`. It bundles the
//! workspace crates behind feature flags so downstream users can pull in only
//! the pieces they need.

#![warn(missing_docs, clippy::pedantic)]

/// Re-export shared primitives for convenience.
pub use agent_primitives as primitives;

/// Tiered embedding memory (enabled by `memory` feature).
#[cfg(feature = "memory")]
pub use agent_memory as memory;

/// Follow graph, similarity scoring and suggestions (enabled by `social` feature).
#[cfg(feature = "social")]
pub use agent_social as social;

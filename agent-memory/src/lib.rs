//! Memory interfaces consulted when comparing agents.
//!
//! Agents accumulate documents in two tiers, short-term and long-term, each
//! stored with an embedding. This crate models those records and the store
//! capability used to fetch them by author.

#![warn(missing_docs, clippy::pedantic)]

pub mod embeddings;
mod error;
pub mod record;
pub mod store;

pub use embeddings::EmbeddingVector;
pub use error::{MemoryError, MemoryResult};
pub use record::{EmbeddingRecord, EmbeddingRecordBuilder, MemoryTier};
pub use store::{LocalMemoryStore, MemorySnapshot, MemoryStore};

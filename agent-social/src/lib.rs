//! Follow graph and content-based follow suggestions for agents.
//!
//! Agents follow each other through a [`FollowGraph`]. New follows are
//! suggested by a [`CandidateRanker`], which scores every agent not followed
//! yet with a [`SimilarityScorer`] comparing memory embeddings. Existing
//! edges can be bulk-loaded from CSV with [`import_follows`].

#![warn(missing_docs, clippy::pedantic)]

pub mod config;
mod error;
pub mod graph;
pub mod import;
pub mod network;
pub mod ranker;
pub mod similarity;

pub use config::{NanPolicy, RankerConfig};
pub use error::{SocialError, SocialResult};
pub use graph::FollowGraph;
pub use import::{
    FollowRow, ImportReport, SkippedRow, import_follows, import_follows_from_path, import_rows,
};
pub use network::SocialNetwork;
pub use ranker::{CandidateRanker, CandidateScore};
pub use similarity::{SimilarityScorer, mean_pairwise_similarity};

//! Content similarity between agents, derived from their memory embeddings.

use std::sync::Arc;

use agent_memory::{EmbeddingVector, MemoryResult, MemoryStore, MemoryTier};
use agent_primitives::Agent;
use tracing::{debug, warn};

use crate::SocialResult;

/// Scores how close two agents are by what they remember.
///
/// Each agent contributes every short-term embedding followed by every
/// long-term embedding. The score is the mean cosine similarity over all
/// cross pairs, or NaN when either side has nothing to compare.
#[derive(Clone)]
pub struct SimilarityScorer {
    store: Arc<dyn MemoryStore>,
}

impl std::fmt::Debug for SimilarityScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarityScorer").finish_non_exhaustive()
    }
}

impl SimilarityScorer {
    /// Creates a scorer reading from the supplied memory store.
    #[must_use]
    pub fn new(store: Arc<dyn MemoryStore>) -> Self {
        Self { store }
    }

    /// Returns the similarity of `first` and `second`, or NaN when there is
    /// no signal.
    ///
    /// Store and record failures are logged and reported as NaN.
    pub async fn similarity(&self, first: &Agent, second: &Agent) -> f32 {
        match self.try_similarity(first, second).await {
            Ok(score) => {
                debug!(first = %first, second = %second, score, "content similarity");
                score
            }
            Err(err) => {
                warn!(?err, first = %first, second = %second, "cannot get content similarity");
                f32::NAN
            }
        }
    }

    /// Like [`similarity`](Self::similarity) but surfaces failures.
    ///
    /// # Errors
    ///
    /// Returns [`SocialError::Memory`](crate::SocialError::Memory) when the
    /// store query fails or two embeddings have different dimensionality.
    pub async fn try_similarity(&self, first: &Agent, second: &Agent) -> SocialResult<f32> {
        let left = self.embeddings(first).await?;
        let right = self.embeddings(second).await?;
        Ok(mean_pairwise_similarity(&left, &right)?)
    }

    /// Fetches the agent's short-term then long-term embeddings, in store order.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn embeddings(&self, agent: &Agent) -> SocialResult<Vec<EmbeddingVector>> {
        let author = agent.memory_key();
        let mut vectors = Vec::new();
        for tier in MemoryTier::ALL {
            let records = self.store.query_by_author(tier, &author).await?;
            vectors.extend(records.iter().map(|record| record.embedding().clone()));
        }
        Ok(vectors)
    }
}

/// Mean cosine similarity over the Cartesian product `left × right`.
///
/// Returns NaN when either side is empty.
///
/// # Errors
///
/// Returns [`MemoryError::DimensionMismatch`](agent_memory::MemoryError::DimensionMismatch)
/// when any pair differs in length.
pub fn mean_pairwise_similarity(
    left: &[EmbeddingVector],
    right: &[EmbeddingVector],
) -> MemoryResult<f32> {
    let mut total = 0.0_f64;
    let mut pairs = 0_usize;
    for u in left {
        for v in right {
            total += f64::from(u.cosine_similarity(v)?);
            pairs += 1;
        }
    }
    if pairs == 0 {
        return Ok(f32::NAN);
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    let mean = (total / pairs as f64) as f32;
    Ok(mean)
}

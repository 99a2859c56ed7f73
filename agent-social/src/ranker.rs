//! Follow suggestions ranked by content similarity.

use std::cmp::Ordering;
use std::collections::HashSet;

use agent_primitives::{Agent, AgentId};
use serde::Serialize;
use tracing::debug;

use crate::config::{NanPolicy, RankerConfig};
use crate::similarity::SimilarityScorer;

/// A suggested agent and how similar it is to the requesting agent.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateScore {
    agent: Agent,
    similarity: f32,
}

impl CandidateScore {
    /// Creates a candidate entry.
    #[must_use]
    pub fn new(agent: Agent, similarity: f32) -> Self {
        Self { agent, similarity }
    }

    /// Returns the suggested agent.
    #[must_use]
    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    /// Returns the similarity score; NaN when it could not be computed.
    #[must_use]
    pub fn similarity(&self) -> f32 {
        self.similarity
    }

    /// Returns whether a score was computed.
    #[must_use]
    pub fn is_scored(&self) -> bool {
        !self.similarity.is_nan()
    }
}

/// Ranks the agents someone does not follow yet.
#[derive(Debug, Clone)]
pub struct CandidateRanker {
    scorer: SimilarityScorer,
    config: RankerConfig,
}

impl CandidateRanker {
    /// Creates a ranker with the default configuration.
    #[must_use]
    pub fn new(scorer: SimilarityScorer) -> Self {
        Self::with_config(scorer, RankerConfig::default())
    }

    /// Creates a ranker with an explicit configuration.
    #[must_use]
    pub fn with_config(scorer: SimilarityScorer, config: RankerConfig) -> Self {
        Self { scorer, config }
    }

    /// Returns the underlying scorer.
    #[must_use]
    pub fn scorer(&self) -> &SimilarityScorer {
        &self.scorer
    }

    /// Suggests agents for `agent` to follow, best match first.
    ///
    /// Candidates are every agent of `all_agents` other than `agent` and the
    /// agents in `followees`, compared by identity. Ties keep the order of
    /// `all_agents`; unscored candidates go last or are dropped according to
    /// the configured [`NanPolicy`].
    pub async fn suggested_follows(
        &self,
        agent: &Agent,
        all_agents: &[Agent],
        followees: &[Agent],
    ) -> Vec<CandidateScore> {
        let excluded: HashSet<AgentId> = followees
            .iter()
            .map(Agent::id)
            .chain(std::iter::once(agent.id()))
            .collect();

        let mut suggestions = Vec::new();
        for candidate in all_agents
            .iter()
            .filter(|candidate| !excluded.contains(&candidate.id()))
        {
            let similarity = self.scorer.similarity(agent, candidate).await;
            if similarity.is_nan() && self.config.nan_policy() == NanPolicy::Drop {
                debug!(agent = %agent, candidate = %candidate, "unscored candidate dropped");
                continue;
            }
            suggestions.push(CandidateScore::new(candidate.clone(), similarity));
        }

        sort_by_similarity(&mut suggestions);
        if let Some(limit) = self.config.max_suggestions() {
            suggestions.truncate(limit.get());
        }
        suggestions
    }
}

/// Stable sort, highest similarity first, NaN after every number.
pub fn sort_by_similarity(candidates: &mut [CandidateScore]) {
    candidates.sort_by(|a, b| descending_nan_last(a.similarity, b.similarity));
}

fn descending_nan_last(a: f32, b: f32) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, similarity: f32) -> CandidateScore {
        CandidateScore::new(Agent::new(name).unwrap(), similarity)
    }

    fn names(candidates: &[CandidateScore]) -> Vec<&str> {
        candidates.iter().map(|c| c.agent().name()).collect()
    }

    #[test]
    fn sorts_descending_with_nan_last() {
        let mut candidates = vec![
            candidate("nan-1", f32::NAN),
            candidate("low", -0.4),
            candidate("high", 0.9),
            candidate("nan-2", f32::NAN),
            candidate("mid", 0.1),
        ];
        sort_by_similarity(&mut candidates);
        assert_eq!(names(&candidates), ["high", "mid", "low", "nan-1", "nan-2"]);
    }

    #[test]
    fn ties_keep_encounter_order() {
        let mut candidates = vec![
            candidate("first", 0.5),
            candidate("top", 0.8),
            candidate("second", 0.5),
            candidate("third", 0.5),
        ];
        sort_by_similarity(&mut candidates);
        assert_eq!(names(&candidates), ["top", "first", "second", "third"]);
    }
}

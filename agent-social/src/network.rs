//! Owner of the roster, the follow graph and the ranker.

use std::path::Path;

use agent_primitives::{Agent, AgentRoster};

use crate::graph::FollowGraph;
use crate::import::{FollowRow, ImportReport, import_follows_from_path, import_rows};
use crate::ranker::{CandidateRanker, CandidateScore};
use crate::{SocialError, SocialResult};

/// Follow graph bound to a fixed roster of agents.
///
/// Created once with every roster agent following nobody; afterwards the
/// graph only changes through [`follow`](Self::follow), the import methods
/// and an explicit [`reinitialize`](Self::reinitialize).
#[derive(Debug)]
pub struct SocialNetwork {
    roster: AgentRoster,
    graph: FollowGraph,
    ranker: CandidateRanker,
}

impl SocialNetwork {
    /// Creates a network where every roster agent starts with no followees.
    #[must_use]
    pub fn new(roster: AgentRoster, ranker: CandidateRanker) -> Self {
        let graph = FollowGraph::with_agents(&roster);
        Self {
            roster,
            graph,
            ranker,
        }
    }

    /// Returns the roster.
    #[must_use]
    pub fn roster(&self) -> &AgentRoster {
        &self.roster
    }

    /// Returns the follow graph.
    #[must_use]
    pub fn graph(&self) -> &FollowGraph {
        &self.graph
    }

    /// Returns the ranker.
    #[must_use]
    pub fn ranker(&self) -> &CandidateRanker {
        &self.ranker
    }

    /// Drops every edge and restores the initial empty graph.
    pub fn reinitialize(&mut self) {
        self.graph.initialize(&self.roster);
    }

    /// Makes `agent` follow `followee`.
    ///
    /// # Errors
    ///
    /// Returns [`SocialError::UnknownAgent`] when either agent is outside the
    /// roster. Self-follows and repeated follows are not errors; they return
    /// `Ok(false)`.
    pub fn follow(&mut self, agent: &Agent, followee: &Agent) -> SocialResult<bool> {
        self.ensure_member(agent)?;
        self.ensure_member(followee)?;
        Ok(self.graph.add_follow(agent, followee))
    }

    /// Makes the agent named `agent` follow the agent named `followee`.
    ///
    /// # Errors
    ///
    /// Returns [`SocialError::UnknownAgent`] when a name does not resolve.
    pub fn follow_by_name(&mut self, agent: &str, followee: &str) -> SocialResult<bool> {
        let agent = self.lookup(agent)?.clone();
        let followee = self.lookup(followee)?.clone();
        Ok(self.graph.add_follow(&agent, &followee))
    }

    /// Returns the agent with the given display name.
    ///
    /// # Errors
    ///
    /// Returns [`SocialError::UnknownAgent`] when no roster agent has that name.
    pub fn lookup(&self, name: &str) -> SocialResult<&Agent> {
        self.roster
            .find_by_name(name)
            .ok_or_else(|| SocialError::UnknownAgent(name.to_owned()))
    }

    /// Applies parsed follow rows.
    pub fn import_rows<I>(&mut self, rows: I) -> ImportReport
    where
        I: IntoIterator<Item = FollowRow>,
    {
        import_rows(&mut self.graph, &self.roster, rows)
    }

    /// Loads follow edges from a CSV file.
    ///
    /// # Errors
    ///
    /// See [`import_follows_from_path`].
    pub fn import_follows_from_path(
        &mut self,
        path: impl AsRef<Path>,
    ) -> SocialResult<ImportReport> {
        import_follows_from_path(&mut self.graph, &self.roster, path)
    }

    /// Ranks the roster agents that `agent` does not follow yet.
    ///
    /// # Errors
    ///
    /// Returns [`SocialError::UnknownAgent`] when `agent` is outside the roster.
    pub async fn suggestions_for(&self, agent: &Agent) -> SocialResult<Vec<CandidateScore>> {
        self.ensure_member(agent)?;
        let followees = self.graph.followees(agent);
        Ok(self
            .ranker
            .suggested_follows(agent, self.roster.as_slice(), followees)
            .await)
    }

    fn ensure_member(&self, agent: &Agent) -> SocialResult<()> {
        if self.roster.contains(agent) {
            Ok(())
        } else {
            Err(SocialError::UnknownAgent(agent.name().to_owned()))
        }
    }
}

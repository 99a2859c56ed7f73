//! Directed follow graph keyed on agent identity.

use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

use agent_primitives::{Agent, AgentId};
use tracing::debug;

#[derive(Debug, Clone)]
struct FollowEntry {
    agent: Agent,
    followees: Vec<Agent>,
}

/// Adjacency list of "who follows whom".
///
/// Entries keep first-insertion order, and followees keep the order in which
/// they were followed. An agent never follows itself and never follows the
/// same agent twice. Edges are only ever added.
#[derive(Debug, Clone, Default)]
pub struct FollowGraph {
    entries: Vec<FollowEntry>,
    index: HashMap<AgentId, usize>,
}

impl FollowGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph in which every given agent follows nobody.
    #[must_use]
    pub fn with_agents<'a, I>(agents: I) -> Self
    where
        I: IntoIterator<Item = &'a Agent>,
    {
        let mut graph = Self::new();
        graph.initialize(agents);
        graph
    }

    /// Discards all edges and maps every given agent to an empty followee list.
    pub fn initialize<'a, I>(&mut self, agents: I)
    where
        I: IntoIterator<Item = &'a Agent>,
    {
        self.entries.clear();
        self.index.clear();
        for agent in agents {
            self.entry_mut(agent);
        }
    }

    /// Records that `agent` follows `followee`.
    ///
    /// Returns `false` without touching the followee list when the edge is a
    /// self-follow or already exists.
    pub fn add_follow(&mut self, agent: &Agent, followee: &Agent) -> bool {
        let entry = self.entry_mut(agent);
        if agent == followee {
            debug!(agent = %agent, "self-follow rejected");
            return false;
        }
        if entry.followees.contains(followee) {
            debug!(agent = %agent, followee = %followee, "already following");
            return false;
        }
        entry.followees.push(followee.clone());
        debug!(agent = %agent, followee = %followee, "follow added");
        true
    }

    /// Returns the agents followed by `agent`, empty when it has no entry.
    #[must_use]
    pub fn followees(&self, agent: &Agent) -> &[Agent] {
        match self.index.get(&agent.id()) {
            Some(&slot) => &self.entries[slot].followees,
            None => &[],
        }
    }

    /// Returns every agent whose followee list contains `agent`, in graph order.
    #[must_use]
    pub fn followers(&self, agent: &Agent) -> Vec<&Agent> {
        self.entries
            .iter()
            .filter(|entry| entry.followees.contains(agent))
            .map(|entry| &entry.agent)
            .collect()
    }

    /// Returns whether the edge `agent -> followee` exists.
    #[must_use]
    pub fn is_following(&self, agent: &Agent, followee: &Agent) -> bool {
        self.followees(agent).contains(followee)
    }

    /// Returns whether `agent` has an entry, even an empty one.
    #[must_use]
    pub fn contains(&self, agent: &Agent) -> bool {
        self.index.contains_key(&agent.id())
    }

    /// Iterates over agents with an entry, in insertion order.
    pub fn agents(&self) -> impl Iterator<Item = &Agent> {
        self.entries.iter().map(|entry| &entry.agent)
    }

    /// Number of agents with an entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no agent has an entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of follow edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.followees.len()).sum()
    }

    /// Human-readable dump of the graph for diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }

    fn entry_mut(&mut self, agent: &Agent) -> &mut FollowEntry {
        let slot = match self.index.get(&agent.id()) {
            Some(&slot) => slot,
            None => {
                self.entries.push(FollowEntry {
                    agent: agent.clone(),
                    followees: Vec::new(),
                });
                let slot = self.entries.len() - 1;
                self.index.insert(agent.id(), slot);
                slot
            }
        };
        &mut self.entries[slot]
    }
}

impl Display for FollowGraph {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "Agent name: {}", entry.agent.name())?;
            if entry.followees.is_empty() {
                writeln!(f, "Following: No friends.")?;
            } else {
                let names: Vec<&str> = entry.followees.iter().map(Agent::name).collect();
                writeln!(f, "Following: {}", names.join(", "))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

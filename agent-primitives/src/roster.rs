//! Ordered agent directory supplied by whatever hosts the agents.

use std::collections::HashSet;

use crate::{Agent, AgentId, Error, Result};

/// Ordered, identity-unique sequence of agents.
///
/// Roster order is the encounter order used when ranking candidates, so it
/// never changes once an agent has been added.
#[derive(Clone, Debug, Default)]
pub struct AgentRoster {
    agents: Vec<Agent>,
    ids: HashSet<AgentId>,
}

impl AgentRoster {
    /// Creates an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster from an ordered collection of agents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateAgent`] if two agents share an identity.
    pub fn from_agents<I>(agents: I) -> Result<Self>
    where
        I: IntoIterator<Item = Agent>,
    {
        let mut roster = Self::new();
        for agent in agents {
            roster.push(agent)?;
        }
        Ok(roster)
    }

    /// Builds a roster by minting one agent per display name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAgent`] when any name is empty.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let agents = names
            .into_iter()
            .map(Agent::new)
            .collect::<Result<Vec<_>>>()?;
        Self::from_agents(agents)
    }

    /// Appends an agent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateAgent`] if the identity is already present.
    pub fn push(&mut self, agent: Agent) -> Result<()> {
        if !self.ids.insert(agent.id()) {
            return Err(Error::DuplicateAgent {
                id: agent.id(),
                name: agent.name().to_owned(),
            });
        }
        self.agents.push(agent);
        Ok(())
    }

    /// Returns the agent whose display name matches exactly.
    ///
    /// When several agents share the name, the last one in roster order wins.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Agent> {
        self.agents.iter().rfind(|agent| agent.name() == name)
    }

    /// Returns whether the agent belongs to the roster.
    #[must_use]
    pub fn contains(&self, agent: &Agent) -> bool {
        self.ids.contains(&agent.id())
    }

    /// Returns the agents in roster order.
    #[must_use]
    pub fn as_slice(&self) -> &[Agent] {
        &self.agents
    }

    /// Iterates over the agents in roster order.
    pub fn iter(&self) -> std::slice::Iter<'_, Agent> {
        self.agents.iter()
    }

    /// Returns the number of agents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Returns whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

impl<'a> IntoIterator for &'a AgentRoster {
    type Item = &'a Agent;
    type IntoIter = std::slice::Iter<'a, Agent>;

    fn into_iter(self) -> Self::IntoIter {
        self.agents.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let roster = AgentRoster::from_names(["Carla", "Aldo", "Bruno"]).unwrap();
        let names: Vec<_> = roster.iter().map(Agent::name).collect();
        assert_eq!(names, ["Carla", "Aldo", "Bruno"]);
    }

    #[test]
    fn rejects_duplicate_identity() {
        let agent = Agent::new("Aldo").unwrap();
        let err = AgentRoster::from_agents([agent.clone(), agent]).expect_err("duplicate");
        assert!(matches!(err, Error::DuplicateAgent { .. }));
    }

    #[test]
    fn accepts_long_names() {
        let long = "A".repeat(97);
        let roster = AgentRoster::from_names([long.clone(), "B".to_owned()]).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.find_by_name(&long).map(Agent::name), Some(long.as_str()));
    }

    #[test]
    fn shared_name_resolves_to_last_agent() {
        let first = Agent::new("Dup").unwrap();
        let second = Agent::new("Dup").unwrap();
        let roster =
            AgentRoster::from_agents([first, second.clone(), Agent::new("B").unwrap()]).unwrap();
        assert_eq!(roster.find_by_name("Dup"), Some(&second));
    }

    #[test]
    fn name_lookup_is_exact() {
        let roster = AgentRoster::from_names(["Aldo", "Bruno"]).unwrap();
        assert_eq!(roster.find_by_name("Bruno").map(Agent::name), Some("Bruno"));
        assert!(roster.find_by_name("bruno").is_none());
        assert!(roster.find_by_name("Xavier").is_none());
    }
}

//! Agents as seen by the follow graph: an identity plus a display name.

use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::{AgentId, Error, Result};

/// A participant in the social graph.
///
/// Two agents are equal when their identities match; the name is only used
/// for display, memory lookups and resolving rows of tabular input.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "AgentRepr")]
pub struct Agent {
    id: AgentId,
    name: String,
}

impl Agent {
    /// Creates an agent with a fresh random identity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAgent`] when the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::with_id(AgentId::random(), name)
    }

    /// Creates an agent with a caller-supplied identity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAgent`] when the name is empty.
    pub fn with_id(id: AgentId, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::InvalidAgent {
                reason: "agent name cannot be empty".into(),
            });
        }
        Ok(Self { id, name })
    }

    /// Returns the agent identity.
    #[must_use]
    pub const fn id(&self) -> AgentId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Key used by the memory store, which indexes authors in lowercase.
    #[must_use]
    pub fn memory_key(&self) -> String {
        self.name.to_lowercase()
    }
}

#[derive(Deserialize)]
struct AgentRepr {
    id: AgentId,
    name: String,
}

impl TryFrom<AgentRepr> for Agent {
    type Error = Error;

    fn try_from(repr: AgentRepr) -> Result<Self> {
        Self::with_id(repr.id, repr.name)
    }
}

impl PartialEq for Agent {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Agent {}

impl Hash for Agent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for Agent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

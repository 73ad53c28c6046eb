//! Agents and the validated, immutable `AgentSet`.
//!
//! # Usage
//!
//! ```rust
//! use bt_core::AgentSetBuilder;
//!
//! let agents = AgentSetBuilder::new()
//!     .add("A", 1)
//!     .add("B", 2)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(agents.len(), 2);
//! assert_eq!(agents.duration(agents.id_of("B").unwrap()), 2);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::mask::MAX_AGENTS;
use crate::{AgentId, AgentMask, ModelError, ModelResult};

// ── Agent ─────────────────────────────────────────────────────────────────────

/// A participant with a fixed crossing duration.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Agent {
    pub name:     String,
    /// Crossing duration in minutes.  Always `> 0` inside an `AgentSet`.
    pub duration: u32,
}

impl Agent {
    pub fn new(name: impl Into<String>, duration: u32) -> Self {
        Self { name: name.into(), duration }
    }
}

// ── AgentSet ──────────────────────────────────────────────────────────────────

/// The fixed universe of agents for one run.
///
/// Agents are stored in insertion order; `AgentId(i)` is the `i`-th agent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentSet {
    agents:  Vec<Agent>,
    by_name: HashMap<String, AgentId>,
}

impl AgentSet {
    /// Validate and build a set from any sequence of agents.
    ///
    /// Fails on an empty name, a zero duration, a duplicate name, or more
    /// than [`MAX_AGENTS`] agents.
    pub fn new<I: IntoIterator<Item = Agent>>(agents: I) -> ModelResult<Self> {
        let agents: Vec<Agent> = agents.into_iter().collect();
        if agents.len() > MAX_AGENTS {
            return Err(ModelError::TooManyAgents { count: agents.len(), max: MAX_AGENTS });
        }

        let mut by_name = HashMap::with_capacity(agents.len());
        for (i, agent) in agents.iter().enumerate() {
            if agent.name.trim().is_empty() {
                return Err(ModelError::EmptyName);
            }
            if agent.duration == 0 {
                return Err(ModelError::NonPositiveDuration { name: agent.name.clone() });
            }
            if by_name.insert(agent.name.clone(), AgentId(i as u32)).is_some() {
                return Err(ModelError::DuplicateAgent(agent.name.clone()));
            }
        }

        Ok(Self { agents, by_name })
    }

    /// A set with no agents.  Its start state is already a goal state.
    pub fn empty() -> Self {
        Self { agents: Vec::new(), by_name: HashMap::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// The universal mask: every agent in the set.
    #[inline]
    pub fn all(&self) -> AgentMask {
        AgentMask::first(self.agents.len())
    }

    #[inline]
    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    /// Crossing duration of `id`.
    ///
    /// # Panics
    ///
    /// If `id` was not issued by this set.
    #[inline]
    pub fn duration(&self, id: AgentId) -> u32 {
        self.agents[id.index()].duration
    }

    /// Name of `id`.
    ///
    /// # Panics
    ///
    /// If `id` was not issued by this set.
    #[inline]
    pub fn name(&self, id: AgentId) -> &str {
        &self.agents[id.index()].name
    }

    pub fn id_of(&self, name: &str) -> Option<AgentId> {
        self.by_name.get(name).copied()
    }

    /// Crossing time for a group: the slowest member's duration, 0 if empty.
    pub fn crossing_time(&self, movers: AgentMask) -> u32 {
        movers.iter().map(|id| self.duration(id)).max().unwrap_or(0)
    }

    /// Shortest individual duration, `None` for an empty set.
    pub fn min_duration(&self) -> Option<u32> {
        self.agents.iter().map(|a| a.duration).min()
    }

    /// Agents with their ids, in id order.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, &Agent)> + '_ {
        self.agents.iter().enumerate().map(|(i, a)| (AgentId(i as u32), a))
    }

    /// Names of the members of `mask`, in id order.
    pub fn names(&self, mask: AgentMask) -> Vec<&str> {
        mask.iter().map(|id| self.name(id)).collect()
    }
}

// ── AgentSetBuilder ───────────────────────────────────────────────────────────

/// Fluent builder for [`AgentSet`].  Validation happens once, in
/// [`build`](Self::build).
#[derive(Default)]
pub struct AgentSetBuilder {
    agents: Vec<Agent>,
}

impl AgentSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an agent.  Duplicates are reported by `build`, not here.
    pub fn add(mut self, name: impl Into<String>, duration: u32) -> Self {
        self.agents.push(Agent::new(name, duration));
        self
    }

    pub fn build(self) -> ModelResult<AgentSet> {
        AgentSet::new(self.agents)
    }
}

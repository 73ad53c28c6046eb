//! Crossing state, its hashable identity, and solution paths.
//!
//! # Invariants
//!
//! For every state reachable from [`State::start`]:
//!
//! ```text
//! origin ∩ destination = ∅
//! origin ∪ destination = ALL
//! ```
//!
//! The transition generator in `bt-search` is the only producer of non-start
//! states and maintains both by construction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{AgentMask, AgentSet};

// ── Side ──────────────────────────────────────────────────────────────────────

/// One bank of the crossing.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default, Serialize, Deserialize)]
pub enum Side {
    /// Where every agent (and the torch) begins.
    #[default]
    Origin,
    /// Where every agent must end up.
    Destination,
}

impl Side {
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Origin      => Side::Destination,
            Side::Destination => Side::Origin,
        }
    }

    /// Lowercase label, used for CSV columns and text output.
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Origin      => "origin",
            Side::Destination => "destination",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── State ─────────────────────────────────────────────────────────────────────

/// A complete snapshot: who is where, where the torch is, and how much time
/// has passed.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct State {
    pub origin:      AgentMask,
    pub destination: AgentMask,
    pub torch:       Side,
    /// Total minutes spent on crossings so far.
    pub elapsed:     u64,
}

impl State {
    /// Canonical start: everyone and the torch on the origin side, no time
    /// elapsed.
    pub fn start(agents: &AgentSet) -> Self {
        Self {
            origin:      agents.all(),
            destination: AgentMask::EMPTY,
            torch:       Side::Origin,
            elapsed:     0,
        }
    }

    /// Agents standing on `side`.
    #[inline]
    pub fn on(&self, side: Side) -> AgentMask {
        match side {
            Side::Origin      => self.origin,
            Side::Destination => self.destination,
        }
    }

    /// Agents on the side that currently holds the torch.
    #[inline]
    pub fn with_torch(&self) -> AgentMask {
        self.on(self.torch)
    }

    /// Identity used by visited sets and cost tables (elapsed excluded).
    #[inline]
    pub fn key(&self) -> StateKey {
        StateKey {
            origin:      self.origin,
            destination: self.destination,
            torch:       self.torch,
        }
    }

    /// `true` if the two sides partition exactly `agents.all()`.
    pub fn is_consistent(&self, agents: &AgentSet) -> bool {
        self.origin.intersection(self.destination).is_empty()
            && self.origin.union(self.destination) == agents.all()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "origin={:?} destination={:?} torch={} t={}",
            self.origin, self.destination, self.torch, self.elapsed
        )
    }
}

// ── StateKey ──────────────────────────────────────────────────────────────────

/// Side contents plus torch position; two states with the same key differ
/// at most in elapsed time.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct StateKey {
    pub origin:      AgentMask,
    pub destination: AgentMask,
    pub torch:       Side,
}

// ── Path ──────────────────────────────────────────────────────────────────────

/// Ordered states from the start state to a goal state.
///
/// Never empty: a path built by the search crate always contains at least
/// the start state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Path {
    states: Vec<State>,
}

impl Path {
    /// Wrap a non-empty state sequence.  Returns `None` for an empty one.
    pub fn new(states: Vec<State>) -> Option<Self> {
        if states.is_empty() {
            None
        } else {
            Some(Self { states })
        }
    }

    #[inline]
    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn iter(&self) -> std::slice::Iter<'_, State> {
        self.states.iter()
    }

    #[inline]
    pub fn start(&self) -> &State {
        &self.states[0]
    }

    #[inline]
    pub fn goal(&self) -> &State {
        &self.states[self.states.len() - 1]
    }

    /// Number of crossings (transitions) in the path.
    #[inline]
    pub fn moves(&self) -> usize {
        self.states.len() - 1
    }

    /// Elapsed time at the goal state.
    #[inline]
    pub fn total_time(&self) -> u64 {
        self.goal().elapsed
    }

    pub fn into_states(self) -> Vec<State> {
        self.states
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a State;
    type IntoIter = std::slice::Iter<'a, State>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}

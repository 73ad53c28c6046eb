//! Legal-transition generator.
//!
//! From any state, the torch-holding side sends either one agent or an
//! unordered pair of distinct agents across, together with the torch.  The
//! crossing costs the slowest mover's duration.
//!
//! With `k` agents on the torch side this yields exactly `k + C(k, 2)`
//! successors: pairs first in ascending `(x, y)` order, then singletons in
//! ascending id order.  The order is a convenience for deterministic tests,
//! not a guarantee callers should rely on.

use bt_core::{AgentMask, AgentSet, Side, State};

/// One legal crossing and the state it produces.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// The one or two agents who cross.
    pub movers: AgentMask,
    /// Side the movers (and the torch) end up on.
    pub toward: Side,
    /// Minutes the crossing takes.
    pub cost:   u32,
    /// Resulting state.
    pub state:  State,
}

impl Transition {
    /// Recover the single legal crossing that turns `from` into `to`.
    ///
    /// Returns `None` if no legal transition links the two states: wrong
    /// torch movement, zero or more than two movers, movers not all taken
    /// from the torch side, or an elapsed difference that does not equal the
    /// slowest mover's duration.
    pub fn between(agents: &AgentSet, from: &State, to: &State) -> Option<Transition> {
        let toward = from.torch.opposite();
        if to.torch != toward {
            return None;
        }

        let movers = to.on(toward).difference(from.on(toward));
        if movers.is_empty() || movers.len() > 2 || !movers.is_subset(from.with_torch()) {
            return None;
        }

        let candidate = cross(agents, from, movers);
        if candidate.state != *to {
            return None;
        }
        Some(candidate)
    }
}

/// Every state reachable from `state` in one crossing.
#[inline]
pub fn next_states(agents: &AgentSet, state: &State) -> Vec<State> {
    transitions(agents, state).into_iter().map(|t| t.state).collect()
}

/// Every legal crossing out of `state`, with movers and cost attached.
///
/// An empty torch side yields no transitions.
pub fn transitions(agents: &AgentSet, state: &State) -> Vec<Transition> {
    let holders: Vec<_> = state.with_torch().iter().collect();
    let k = holders.len();
    let mut out = Vec::with_capacity(k + k * k.saturating_sub(1) / 2);

    // Unordered pairs; `j > i` rules out self-pairing and mirrored duplicates.
    for (i, &a) in holders.iter().enumerate() {
        for &b in &holders[i + 1..] {
            out.push(cross(agents, state, AgentMask::pair(a, b)));
        }
    }

    for &a in &holders {
        out.push(cross(agents, state, AgentMask::single(a)));
    }

    out
}

/// Move `movers` and the torch to the other side.
fn cross(agents: &AgentSet, state: &State, movers: AgentMask) -> Transition {
    let toward = state.torch.opposite();
    let cost = agents.crossing_time(movers);

    let (origin, destination) = match toward {
        Side::Destination => (state.origin.difference(movers), state.destination.union(movers)),
        Side::Origin      => (state.origin.union(movers), state.destination.difference(movers)),
    };

    Transition {
        movers,
        toward,
        cost,
        state: State {
            origin,
            destination,
            torch:   toward,
            elapsed: state.elapsed + u64::from(cost),
        },
    }
}

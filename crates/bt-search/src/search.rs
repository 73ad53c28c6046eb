//! Entry points for callers that only want a path.

use bt_core::{AgentSet, Path, SearchConfig, State};

use crate::engine::solve;
use crate::frontier::{BreadthFirst, UniformCost};
use crate::observer::NoopObserver;
use crate::transition::next_states;
use crate::SearchResult;

/// Path with the fewest crossings (breadth-first search).
pub fn search_by_moves(agents: &AgentSet) -> SearchResult<Path> {
    solve::<BreadthFirst, _>(agents, &SearchConfig::default(), &mut NoopObserver)
        .map(|solution| solution.path)
}

/// Path with the least total crossing time (uniform-cost search).
pub fn search_by_time(agents: &AgentSet) -> SearchResult<Path> {
    solve::<UniformCost, _>(agents, &SearchConfig::default(), &mut NoopObserver)
        .map(|solution| solution.path)
}

/// Successors of `state`, for tooling that inspects the state space without
/// running a full search.
pub fn enumerate_transitions(agents: &AgentSet, state: &State) -> Vec<State> {
    next_states(agents, state)
}

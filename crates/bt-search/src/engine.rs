//! The shared engine loop behind both search strategies.
//!
//! ```text
//! queue start node
//! loop:
//!   ① budget / observer check      → BudgetExhausted | Aborted
//!   ② frontier.next()              → NotFound when exhausted
//!   ③ goal test                    → reconstruct path via parent links
//!   ④ expand: offer every successor; accepted ones enter the arena
//! ```
//!
//! Nodes live in a flat arena (`Vec<Node>`) and point at their parent by
//! index, so a frontier entry is a single `usize` and the path is rebuilt
//! only once, for the goal.

use bt_core::{AgentSet, Path, SearchConfig, State};

use crate::frontier::{Frontier, NodeRef, Strategy};
use crate::goal::is_goal;
use crate::observer::{SearchCommand, SearchObserver};
use crate::transition::next_states;
use crate::{SearchError, SearchResult, SearchStats};

// ── Solution ──────────────────────────────────────────────────────────────────

/// A found path together with the counters of the run that found it.
#[derive(Clone, Debug)]
pub struct Solution {
    pub path:     Path,
    pub stats:    SearchStats,
    pub strategy: Strategy,
}

// ── Engine ────────────────────────────────────────────────────────────────────

struct Node {
    state:  State,
    parent: Option<NodeRef>,
}

/// Run one complete search with frontier policy `F`.
///
/// `F = BreadthFirst` minimizes the number of crossings; `F = UniformCost`
/// minimizes total elapsed time.  `agents` is assumed valid (it can only be
/// constructed through validation).
pub fn solve<F, O>(
    agents:   &AgentSet,
    config:   &SearchConfig,
    observer: &mut O,
) -> SearchResult<Solution>
where
    F: Frontier,
    O: SearchObserver + ?Sized,
{
    let mut frontier = F::default();
    let mut stats = SearchStats::default();

    let start = State::start(agents);
    observer.on_search_start(F::STRATEGY, &start);

    let mut nodes = vec![Node { state: start, parent: None }];
    frontier.offer(start.key(), start.elapsed, 0);
    stats.enqueued = 1;
    stats.record_frontier(frontier.len());

    let outcome = loop {
        if config.budget_exhausted(stats.expanded) {
            break Err(SearchError::BudgetExhausted { expanded: stats.expanded });
        }
        if observer.check_termination(&stats) == SearchCommand::Stop {
            break Err(SearchError::Aborted { expanded: stats.expanded });
        }

        let Some(current) = frontier.next() else {
            break Err(SearchError::NotFound);
        };
        let state = nodes[current].state;
        stats.expanded += 1;
        stats.record_frontier(frontier.len());

        if is_goal(agents, &state) {
            let path = reconstruct(&nodes, current);
            observer.on_goal(&path, &stats);
            break Ok(path);
        }

        observer.on_expand(&state, &stats);

        for next in next_states(agents, &state) {
            stats.generated += 1;
            let node = nodes.len();
            if frontier.offer(next.key(), next.elapsed, node) {
                nodes.push(Node { state: next, parent: Some(current) });
                stats.enqueued += 1;
            }
        }
        stats.record_frontier(frontier.len());
    };

    observer.on_search_end(&stats);

    outcome.map(|path| Solution { path, stats, strategy: F::STRATEGY })
}

/// Walk parent links from `goal` back to the start node.
fn reconstruct(nodes: &[Node], goal: NodeRef) -> Path {
    let mut states = Vec::new();
    let mut cur = Some(goal);
    while let Some(idx) = cur {
        states.push(nodes[idx].state);
        cur = nodes[idx].parent;
    }
    states.reverse();
    // The walk always yields at least the goal node itself.
    Path::new(states).unwrap_or_else(|| unreachable!("reconstructed path is never empty"))
}

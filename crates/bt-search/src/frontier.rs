//! Frontier policies: the only thing that differs between BFS and UCS.
//!
//! The engine loop in [`engine`](crate::engine) owns a node arena and asks a
//! [`Frontier`] two questions: "should this freshly generated node be
//! queued?" ([`offer`](Frontier::offer)) and "which node do I expand next?"
//! ([`next`](Frontier::next)).  Each policy keeps its own bookkeeping:
//!
//! | Policy          | Queue                         | Bookkeeping                      |
//! |-----------------|-------------------------------|----------------------------------|
//! | [`BreadthFirst`]| FIFO (`VecDeque`)             | visited `StateKey` set           |
//! | [`UniformCost`] | min-heap on `(elapsed, seq)`  | best-cost table + closed set     |
//!
//! The two tables are deliberately separate types.  BFS treats two states
//! with equal sides and torch as the same node regardless of elapsed time;
//! UCS must remember the cheapest elapsed time seen per key.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};
use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};

use bt_core::StateKey;

/// Index of a node in the engine's arena.
pub type NodeRef = usize;

// ── Strategy ──────────────────────────────────────────────────────────────────

/// Which optimality criterion a frontier delivers.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Strategy {
    /// Fewest crossings (breadth-first search).
    Moves,
    /// Least total time (uniform-cost search).
    Time,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Moves => "moves",
            Strategy::Time  => "time",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Frontier trait ────────────────────────────────────────────────────────────

/// Ordering and admission policy for the engine loop.
///
/// Implementations must never hand out a node whose key has already been
/// handed out (closed): reopening a key would let the symmetric transition
/// relation cycle back to the start state forever.
pub trait Frontier: Default {
    /// Optimality criterion this frontier guarantees.
    const STRATEGY: Strategy;

    /// Consider a newly generated node reached at total cost `cost`.
    ///
    /// Returns `true` if the node was queued.  When `false`, the engine
    /// discards the node.
    fn offer(&mut self, key: StateKey, cost: u64, node: NodeRef) -> bool;

    /// Next node to expand, or `None` when the frontier is exhausted.
    fn next(&mut self) -> Option<NodeRef>;

    /// Number of queued entries (stale UCS entries included).
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ── BreadthFirst ──────────────────────────────────────────────────────────────

/// FIFO frontier with mark-on-enqueue visited set.
///
/// Because a key is marked the moment it is first queued, it can be popped
/// at most once, and it is popped at its minimum hop distance from the
/// start.
#[derive(Default, Debug)]
pub struct BreadthFirst {
    queue:   VecDeque<NodeRef>,
    visited: FxHashSet<StateKey>,
}

impl Frontier for BreadthFirst {
    const STRATEGY: Strategy = Strategy::Moves;

    fn offer(&mut self, key: StateKey, _cost: u64, node: NodeRef) -> bool {
        if !self.visited.insert(key) {
            return false;
        }
        self.queue.push_back(node);
        true
    }

    fn next(&mut self) -> Option<NodeRef> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

// ── UniformCost ───────────────────────────────────────────────────────────────

/// Min-heap frontier ordered by cumulative elapsed time.
///
/// Entries are `(cost, seq, node, key)`; `seq` is a monotonically increasing
/// insertion counter, so equal-cost entries pop in FIFO order and the result
/// is deterministic.
#[derive(Default, Debug)]
pub struct UniformCost {
    heap:   BinaryHeap<Reverse<(u64, u64, NodeRef, StateKey)>>,
    best:   FxHashMap<StateKey, u64>,
    closed: FxHashSet<StateKey>,
    seq:    u64,
}

impl UniformCost {
    /// Lowest cost at which `key` has been queued so far.
    pub fn best_cost(&self, key: &StateKey) -> Option<u64> {
        self.best.get(key).copied()
    }
}

impl Frontier for UniformCost {
    const STRATEGY: Strategy = Strategy::Time;

    fn offer(&mut self, key: StateKey, cost: u64, node: NodeRef) -> bool {
        if self.closed.contains(&key) {
            return false;
        }
        match self.best.get(&key) {
            Some(&known) if cost >= known => return false,
            _ => {}
        }
        self.best.insert(key, cost);
        self.heap.push(Reverse((cost, self.seq, node, key)));
        self.seq += 1;
        true
    }

    fn next(&mut self) -> Option<NodeRef> {
        while let Some(Reverse((_cost, _seq, node, key))) = self.heap.pop() {
            // Skip stale heap entries superseded by a cheaper push.
            if self.closed.insert(key) {
                return Some(node);
            }
        }
        None
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

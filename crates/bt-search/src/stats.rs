//! Per-run search counters.

use std::fmt;

/// Counters collected by the engine loop.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped from the frontier (the goal node included).
    pub expanded:      u64,
    /// Successor states produced by the transition generator.
    pub generated:     u64,
    /// Successors accepted by the frontier (the start node included).
    pub enqueued:      u64,
    /// Current frontier length.
    pub frontier:      usize,
    /// Largest frontier length observed.
    pub peak_frontier: usize,
}

impl SearchStats {
    /// Successors rejected as already visited or not cheaper.
    #[inline]
    pub fn pruned(&self) -> u64 {
        // The start node is enqueued without being generated.
        (self.generated + 1).saturating_sub(self.enqueued)
    }

    pub(crate) fn record_frontier(&mut self, len: usize) {
        self.frontier = len;
        self.peak_frontier = self.peak_frontier.max(len);
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expanded={} generated={} enqueued={} pruned={} peak_frontier={}",
            self.expanded,
            self.generated,
            self.enqueued,
            self.pruned(),
            self.peak_frontier
        )
    }
}

//! Search configuration.

use serde::{Deserialize, Serialize};

/// Knobs shared by both search strategies.
///
/// Typically built in code or deserialized by the application crate and
/// passed to `bt_search::solve`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Stop with a budget error after this many node expansions.  `None`
    /// searches until a goal is found or the frontier is exhausted.
    pub max_expansions: Option<u64>,

    /// Progress-line cadence, in expansions, for logging observers.
    /// 0 disables periodic lines (header and summary are still printed).
    pub log_interval: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_expansions: None,
            log_interval:   1_000,
        }
    }
}

impl SearchConfig {
    /// Config with an expansion budget and default logging cadence.
    pub fn with_max_expansions(max_expansions: u64) -> Self {
        Self { max_expansions: Some(max_expansions), ..Self::default() }
    }

    /// `true` once `expanded` has used up the budget.
    #[inline]
    pub fn budget_exhausted(&self, expanded: u64) -> bool {
        self.max_expansions.is_some_and(|max| expanded >= max)
    }
}

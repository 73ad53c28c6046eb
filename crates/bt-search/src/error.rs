//! Search error type.

use thiserror::Error;

/// Ways a search can end without a path.
///
/// `NotFound` means the reachable state space was exhausted.  The other two
/// variants mean the search was cut short and says nothing about whether a
/// solution exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("no solution: search frontier exhausted without reaching a goal state")]
    NotFound,

    #[error("expansion budget exhausted after {expanded} expansions")]
    BudgetExhausted { expanded: u64 },

    #[error("search aborted by observer after {expanded} expansions")]
    Aborted { expanded: u64 },
}

pub type SearchResult<T> = Result<T, SearchError>;

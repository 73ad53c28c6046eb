//! Domain-model error type.
//!
//! Everything here is raised while *building* an `AgentSet` (directly or via
//! the CSV loader).  Once a set exists it is valid, and the search crates
//! never re-check it.

use thiserror::Error;

/// Errors produced by `bt-core`.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("duplicate agent name {0:?}")]
    DuplicateAgent(String),

    #[error("agent {name:?} has a non-positive crossing duration")]
    NonPositiveDuration { name: String },

    #[error("agent name must not be empty")]
    EmptyName,

    #[error("agent set has {count} agents; at most {max} are supported")]
    TooManyAgents { count: usize, max: usize },

    #[error("agent file parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `bt-core`.
pub type ModelResult<T> = Result<T, ModelError>;

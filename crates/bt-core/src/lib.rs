//! `bt-core` — domain model for the `bridge_torch` crossing solver.
//!
//! This crate is a dependency of every other `bt-*` crate.  It has no `bt-*`
//! dependencies and performs no search; it only defines *what* a crossing
//! problem and its states are.
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`ids`]      | `AgentId`                                              |
//! | [`mask`]     | `AgentMask` bitset, `MAX_AGENTS`                       |
//! | [`agent`]    | `Agent`, `AgentSet`, `AgentSetBuilder`                 |
//! | [`state`]    | `Side`, `State`, `StateKey`, `Path`                    |
//! | [`config`]   | `SearchConfig`                                         |
//! | [`loader`]   | `load_agents_csv`, `load_agents_reader`                |
//! | [`error`]    | `ModelError`, `ModelResult`                            |
//!
//! Public value types derive `Serialize`/`Deserialize`; `serde` is always on
//! because the CSV loader needs it.

pub mod agent;
pub mod config;
pub mod error;
pub mod ids;
pub mod loader;
pub mod mask;
pub mod state;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use agent::{Agent, AgentSet, AgentSetBuilder};
pub use config::SearchConfig;
pub use error::{ModelError, ModelResult};
pub use ids::AgentId;
pub use loader::{load_agents_csv, load_agents_reader};
pub use mask::{AgentMask, MAX_AGENTS};
pub use state::{Path, Side, State, StateKey};

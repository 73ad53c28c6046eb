//! `bt-search` — state-space search for the bridge-and-torch problem.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`transition`] | `Transition`, `transitions`, `next_states`               |
//! | [`goal`]       | `is_goal`                                                |
//! | [`frontier`]   | `Frontier` trait, `BreadthFirst`, `UniformCost`          |
//! | [`engine`]     | `solve`, `Solution`                                      |
//! | [`search`]     | `search_by_moves`, `search_by_time`, `enumerate_transitions` |
//! | [`observer`]   | `SearchObserver`, `NoopObserver`, `LogObserver`, `TimeLimit` |
//! | [`stats`]      | `SearchStats`                                            |
//! | [`error`]      | `SearchError`, `SearchResult<T>`                         |
//!
//! # Quick-start
//!
//! ```rust
//! use bt_core::AgentSetBuilder;
//! use bt_search::{search_by_moves, search_by_time};
//!
//! let agents = AgentSetBuilder::new()
//!     .add("A", 1).add("B", 2).add("C", 5).add("D", 10)
//!     .build()
//!     .unwrap();
//!
//! let fastest = search_by_time(&agents).unwrap();
//! assert_eq!(fastest.total_time(), 17);
//! assert_eq!(search_by_moves(&agents).unwrap().moves(), 5);
//! ```

pub mod engine;
pub mod error;
pub mod frontier;
pub mod goal;
pub mod observer;
pub mod search;
pub mod stats;
pub mod transition;

#[cfg(test)]
mod tests;

pub use engine::{solve, Solution};
pub use error::{SearchError, SearchResult};
pub use frontier::{BreadthFirst, Frontier, NodeRef, Strategy, UniformCost};
pub use goal::is_goal;
pub use observer::{LogObserver, NoopObserver, SearchCommand, SearchObserver, TimeLimit};
pub use search::{enumerate_transitions, search_by_moves, search_by_time};
pub use stats::SearchStats;
pub use transition::{next_states, transitions, Transition};

//! CSV agent-set loader.
//!
//! # CSV format
//!
//! One row per agent, in the order ids should be assigned:
//!
//! ```csv
//! name,duration
//! P1,1
//! P2,2
//! P5,5
//! P10,10
//! ```
//!
//! `duration` is a positive integer number of minutes.  Negative or
//! non-numeric values are parse errors; `0` is rejected by
//! [`AgentSet::new`] as a non-positive duration.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{Agent, AgentSet, ModelError};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct AgentRecord {
    name:     String,
    duration: u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and validate an [`AgentSet`] from a CSV file.
pub fn load_agents_csv(path: &Path) -> Result<AgentSet, ModelError> {
    let file = std::fs::File::open(path)
        .map_err(ModelError::Io)?;
    load_agents_reader(file)
}

/// Like [`load_agents_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for agent sets embedded
/// in a binary.
pub fn load_agents_reader<R: Read>(reader: R) -> Result<AgentSet, ModelError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let agents = csv_reader
        .deserialize::<AgentRecord>()
        .map(|result| {
            let row = result.map_err(|e| ModelError::Parse(e.to_string()))?;
            Ok(Agent::new(row.name, row.duration))
        })
        .collect::<Result<Vec<Agent>, ModelError>>()?;

    AgentSet::new(agents)
}

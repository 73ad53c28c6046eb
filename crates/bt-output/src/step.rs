//! Turning a path of states into human-meaningful crossing steps.
//!
//! Consecutive states are diffed with [`Transition::between`]: the agents
//! that changed sides are the movers, the torch side tells the direction,
//! and the elapsed difference is the step duration.

use bt_core::{AgentSet, Path, Side};
use bt_search::Transition;

use crate::{OutputError, OutputResult};

/// One crossing in a solution path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// 1-based position in the path.
    pub index:    usize,
    /// Names of the one or two agents who crossed, in id order.
    pub movers:   Vec<String>,
    /// Side the movers ended up on.
    pub toward:   Side,
    /// Minutes this crossing took.
    pub duration: u32,
    /// Total minutes elapsed after this crossing.
    pub elapsed:  u64,
}

impl Step {
    /// "P1 and P2" / "P5".
    pub fn movers_label(&self) -> String {
        self.movers.join(" and ")
    }

    /// Verb phrase matching the direction of travel.
    pub fn verb(&self) -> &'static str {
        match (self.toward, self.movers.len()) {
            (Side::Destination, 1) => "crosses to",
            (Side::Destination, _) => "cross to",
            (Side::Origin, 1)      => "returns to",
            (Side::Origin, _)      => "return to",
        }
    }
}

/// Convert a path into its crossing steps.
///
/// Fails with [`OutputError::BrokenPath`] if two consecutive states are not
/// linked by a legal crossing (e.g. a hand-built path).
pub fn materialize(agents: &AgentSet, path: &Path) -> OutputResult<Vec<Step>> {
    path.states()
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let t = Transition::between(agents, &pair[0], &pair[1])
                .ok_or(OutputError::BrokenPath { step: i + 1 })?;
            Ok(Step {
                index:    i + 1,
                movers:   agents.names(t.movers).into_iter().map(str::to_owned).collect(),
                toward:   t.toward,
                duration: t.cost,
                elapsed:  t.state.elapsed,
            })
        })
        .collect()
}

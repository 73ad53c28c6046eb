//! The `PathWriter` trait implemented by output backends.

use bt_core::AgentSet;
use bt_search::Solution;

use crate::step::materialize;
use crate::{OutputResult, StepRow, SummaryRow};

/// Trait implemented by tabular output backends.
pub trait PathWriter {
    /// Write the crossing rows of one solution.
    fn write_steps(&mut self, rows: &[StepRow]) -> OutputResult<()>;

    /// Write one run summary row.
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;

    /// Materialize `solution` and write both its steps and its summary under
    /// the label `run`.
    fn write_solution(&mut self, run: &str, agents: &AgentSet, solution: &Solution) -> OutputResult<()> {
        let rows: Vec<StepRow> = materialize(agents, &solution.path)?
            .into_iter()
            .map(|step| StepRow {
                run:      run.to_owned(),
                step:     step.index as u64,
                movers:   step.movers.join("+"),
                toward:   step.toward.as_str(),
                duration: step.duration,
                elapsed:  step.elapsed,
            })
            .collect();
        self.write_steps(&rows)?;

        self.write_summary(&SummaryRow {
            run:        run.to_owned(),
            moves:      solution.path.moves() as u64,
            total_time: solution.path.total_time(),
            expanded:   solution.stats.expanded,
            generated:  solution.stats.generated,
        })
    }
}

//! Plain data row types written by output backends.

/// One crossing of one solution, flattened for tabular output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRow {
    /// Label of the run that produced the path ("moves", "time", …).
    pub run:      String,
    pub step:     u64,
    /// Mover names joined with `+`.
    pub movers:   String,
    pub toward:   &'static str,
    pub duration: u32,
    pub elapsed:  u64,
}

/// Summary of one search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub run:        String,
    pub moves:      u64,
    pub total_time: u64,
    pub expanded:   u64,
    pub generated:  u64,
}

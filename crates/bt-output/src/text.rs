//! Plain-text rendering of a solution path.
//!
//! ```text
//! 1. A and B cross to destination | +2 min | total 2 min
//! 2. A returns to origin | +1 min | total 3 min
//! ...
//! 5 crossings, 17 min
//! ```

use std::fmt::Write as _;

use bt_core::{AgentSet, Path};

use crate::step::{materialize, Step};
use crate::OutputResult;

/// Render one line per crossing plus a closing summary line.
pub fn render_text(agents: &AgentSet, path: &Path) -> OutputResult<String> {
    let steps = materialize(agents, path)?;
    let mut out = String::new();
    for step in &steps {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", render_step(step));
    }
    let _ = write!(out, "{} crossings, {} min", path.moves(), path.total_time());
    Ok(out)
}

/// Render a single step, without a trailing newline.
pub fn render_step(step: &Step) -> String {
    format!(
        "{}. {} {} {} | +{} min | total {} min",
        step.index,
        step.movers_label(),
        step.verb(),
        step.toward,
        step.duration,
        step.elapsed
    )
}

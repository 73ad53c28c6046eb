//! torch — solve a bridge-and-torch crossing both ways and report the result.
//!
//! ```text
//! torch [AGENTS_CSV]
//! ```
//!
//! Without an argument the classic five-person set is used.  Both searches
//! run with a progress table on stdout; each path is printed as text, both
//! are written to `output/torch/*.csv`, and a JSON summary closes the run.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use serde::Serialize;

use bt_core::{load_agents_csv, load_agents_reader, AgentSet, SearchConfig};
use bt_output::{render_text, CsvWriter, PathWriter};
use bt_search::{
    solve, BreadthFirst, Frontier, LogObserver, SearchError, Solution, TimeLimit, UniformCost,
};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR:   &str     = "output/torch";
const LOG_INTERVAL: u64      = 50;
const TIME_LIMIT:   Duration = Duration::from_secs(30);

const DEFAULT_AGENTS_CSV: &str = "\
name,duration\n\
P1,1\n\
P2,2\n\
P5,5\n\
P10,10\n\
P15,15\n\
";

// ── JSON summary ──────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct RunSummary<'a> {
    strategy:   &'static str,
    moves:      usize,
    total_time: u64,
    expanded:   u64,
    generated:  u64,
    path:       &'a bt_core::Path,
}

impl<'a> RunSummary<'a> {
    fn new(solution: &'a Solution) -> Self {
        Self {
            strategy:   solution.strategy.as_str(),
            moves:      solution.path.moves(),
            total_time: solution.path.total_time(),
            expanded:   solution.stats.expanded,
            generated:  solution.stats.generated,
            path:       &solution.path,
        }
    }
}

// ── Runner ────────────────────────────────────────────────────────────────────

fn run<F: Frontier>(agents: &AgentSet, config: &SearchConfig) -> Result<Solution> {
    let mut observer = (
        LogObserver::stdout(config.log_interval),
        TimeLimit::new(TIME_LIMIT, 1_024),
    );

    let result = solve::<F, _>(agents, config, &mut observer);

    if let Some(e) = observer.0.take_error() {
        eprintln!("log error: {e}");
    }

    match result {
        Ok(solution) => Ok(solution),
        Err(SearchError::Aborted { expanded }) => Err(anyhow::anyhow!(
            "{} search hit the {}s time limit after {expanded} expansions",
            F::STRATEGY,
            TIME_LIMIT.as_secs()
        )),
        Err(e) => Err(e).with_context(|| format!("{} search failed", F::STRATEGY)),
    }
}

fn load_agents(arg: Option<PathBuf>) -> Result<AgentSet> {
    match arg {
        Some(path) => load_agents_csv(&path)
            .with_context(|| format!("loading agents from {}", path.display())),
        None => load_agents_reader(Cursor::new(DEFAULT_AGENTS_CSV))
            .context("loading built-in agent set"),
    }
}

fn main() -> Result<()> {
    let agents = load_agents(std::env::args_os().nth(1).map(PathBuf::from))?;

    println!("=== torch — bridge-and-torch solver ===");
    println!("Agents: {}", agents.len());
    for (_, agent) in agents.iter() {
        println!("  {:<8} {:>4} min", agent.name, agent.duration);
    }
    println!();

    let config = SearchConfig { log_interval: LOG_INTERVAL, ..SearchConfig::default() };

    // 1. Fewest crossings.
    let t0 = Instant::now();
    let by_moves = run::<BreadthFirst>(&agents, &config)?;
    println!("\nFewest crossings ({:.3} s):", t0.elapsed().as_secs_f64());
    println!("{}\n", render_text(&agents, &by_moves.path)?);

    // 2. Least time.
    let t0 = Instant::now();
    let by_time = run::<UniformCost>(&agents, &config)?;
    println!("\nLeast time ({:.3} s):", t0.elapsed().as_secs_f64());
    println!("{}\n", render_text(&agents, &by_time.path)?);

    // 3. CSV output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let mut writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    writer.write_solution(by_moves.strategy.as_str(), &agents, &by_moves)?;
    writer.write_solution(by_time.strategy.as_str(), &agents, &by_time)?;
    writer.finish()?;
    println!("Wrote {OUTPUT_DIR}/steps.csv and {OUTPUT_DIR}/summaries.csv");

    // 4. JSON summary.
    let summary = [RunSummary::new(&by_moves), RunSummary::new(&by_time)];
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

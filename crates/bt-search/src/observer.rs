//! Search observer trait for progress reporting and early termination.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use bt_core::{Path, State};

use crate::{SearchStats, Strategy};

// ── SearchCommand ─────────────────────────────────────────────────────────────

/// Returned by [`SearchObserver::check_termination`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchCommand {
    /// Keep searching.
    Continue,
    /// Abort; the search returns `SearchError::Aborted`.
    Stop,
}

// ── SearchObserver ────────────────────────────────────────────────────────────

/// Callbacks invoked by [`solve`][crate::solve] at key points of the engine
/// loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — expansion counter
///
/// ```rust
/// use bt_core::State;
/// use bt_search::{SearchObserver, SearchStats};
///
/// struct Counter(u64);
///
/// impl SearchObserver for Counter {
///     fn on_expand(&mut self, _state: &State, _stats: &SearchStats) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SearchObserver {
    /// Called once, before the start node is queued.
    fn on_search_start(&mut self, _strategy: Strategy, _start: &State) {}

    /// Called before every frontier pop.  Returning [`SearchCommand::Stop`]
    /// ends the search immediately.
    fn check_termination(&mut self, _stats: &SearchStats) -> SearchCommand {
        SearchCommand::Continue
    }

    /// Called for every popped non-goal state, before its successors are
    /// generated.
    fn on_expand(&mut self, _state: &State, _stats: &SearchStats) {}

    /// Called once when a goal state is popped.
    fn on_goal(&mut self, _path: &Path, _stats: &SearchStats) {}

    /// Called exactly once when the search ends, however it ends.
    fn on_search_end(&mut self, _stats: &SearchStats) {}
}

/// A [`SearchObserver`] that does nothing.  Use when you need to call
/// `solve` but don't want callbacks.
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn on_search_start(&mut self, strategy: Strategy, start: &State) {
        (**self).on_search_start(strategy, start);
    }

    fn check_termination(&mut self, stats: &SearchStats) -> SearchCommand {
        (**self).check_termination(stats)
    }

    fn on_expand(&mut self, state: &State, stats: &SearchStats) {
        (**self).on_expand(state, stats);
    }

    fn on_goal(&mut self, path: &Path, stats: &SearchStats) {
        (**self).on_goal(path, stats);
    }

    fn on_search_end(&mut self, stats: &SearchStats) {
        (**self).on_search_end(stats);
    }
}

/// Fan every callback out to both observers; either one can stop the search.
impl<A: SearchObserver, B: SearchObserver> SearchObserver for (A, B) {
    fn on_search_start(&mut self, strategy: Strategy, start: &State) {
        self.0.on_search_start(strategy, start);
        self.1.on_search_start(strategy, start);
    }

    fn check_termination(&mut self, stats: &SearchStats) -> SearchCommand {
        match self.0.check_termination(stats) {
            SearchCommand::Stop => SearchCommand::Stop,
            SearchCommand::Continue => self.1.check_termination(stats),
        }
    }

    fn on_expand(&mut self, state: &State, stats: &SearchStats) {
        self.0.on_expand(state, stats);
        self.1.on_expand(state, stats);
    }

    fn on_goal(&mut self, path: &Path, stats: &SearchStats) {
        self.0.on_goal(path, stats);
        self.1.on_goal(path, stats);
    }

    fn on_search_end(&mut self, stats: &SearchStats) {
        self.0.on_search_end(stats);
        self.1.on_search_end(stats);
    }
}

// ── LogObserver ───────────────────────────────────────────────────────────────

/// Prints a progress table: a header, one line every `interval` expansions,
/// and a closing summary.
///
/// Write errors are stored internally because observer methods have no
/// return value.  After the search returns, check with
/// [`take_error`][Self::take_error].
pub struct LogObserver<W: Write> {
    out:        W,
    interval:   u64,
    strategy:   Option<Strategy>,
    started:    Instant,
    last_error: Option<io::Error>,
}

impl LogObserver<io::Stdout> {
    /// Log to standard output.
    pub fn stdout(interval: u64) -> Self {
        Self::new(io::stdout(), interval)
    }
}

impl<W: Write> LogObserver<W> {
    /// Log to `out`, one progress line every `interval` expansions (0 = no
    /// periodic lines).
    pub fn new(out: W, interval: u64) -> Self {
        Self {
            out,
            interval,
            strategy:   None,
            started:    Instant::now(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any).
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect a buffer in tests).
    pub fn into_inner(self) -> W {
        self.out
    }

    fn label(&self) -> &'static str {
        self.strategy.map_or("?", Strategy::as_str)
    }

    fn store_err(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn line(&mut self, stats: &SearchStats, t: u64) {
        let secs = self.started.elapsed().as_secs_f32();
        let label = self.label();
        let result = writeln!(
            self.out,
            "{:<8} | {:>8.3}s | {:>10} | {:>10} | {:>9} | {:>6}",
            label, secs, stats.expanded, stats.generated, stats.frontier, t
        );
        self.store_err(result);
    }
}

impl<W: Write> SearchObserver for LogObserver<W> {
    fn on_search_start(&mut self, strategy: Strategy, _start: &State) {
        self.strategy = Some(strategy);
        self.started = Instant::now();
        let result = writeln!(
            self.out,
            "{:<8} | {:>9} | {:>10} | {:>10} | {:>9} | {:>6}\n{}",
            "Strategy", "Wall", "Expanded", "Generated", "Frontier", "t",
            "-".repeat(68)
        );
        self.store_err(result);
    }

    fn on_expand(&mut self, state: &State, stats: &SearchStats) {
        if self.interval > 0 && stats.expanded % self.interval == 0 {
            self.line(stats, state.elapsed);
        }
    }

    fn on_goal(&mut self, path: &Path, _stats: &SearchStats) {
        let label = self.label();
        let result = writeln!(
            self.out,
            "{label}: goal reached in {} moves, {} min",
            path.moves(),
            path.total_time()
        );
        self.store_err(result);
    }

    fn on_search_end(&mut self, stats: &SearchStats) {
        let label = self.label();
        let secs = self.started.elapsed().as_secs_f64();
        let result = writeln!(self.out, "{label}: search finished in {secs:.3}s ({stats})")
            .and_then(|()| self.out.flush());
        self.store_err(result);
    }
}

// ── TimeLimit ─────────────────────────────────────────────────────────────────

/// Stops the search once a wall-clock budget is spent.
///
/// The clock is read only every `check_interval` termination checks.
pub struct TimeLimit {
    limit:          Duration,
    check_interval: u64,
    started:        Option<Instant>,
    since_check:    u64,
}

impl TimeLimit {
    pub fn new(limit: Duration, check_interval: u64) -> Self {
        Self {
            limit,
            check_interval: check_interval.max(1),
            started:        None,
            since_check:    0,
        }
    }
}

impl SearchObserver for TimeLimit {
    fn on_search_start(&mut self, _strategy: Strategy, _start: &State) {
        self.started = Some(Instant::now());
        self.since_check = 0;
    }

    fn check_termination(&mut self, _stats: &SearchStats) -> SearchCommand {
        self.since_check += 1;
        if self.since_check < self.check_interval {
            return SearchCommand::Continue;
        }
        self.since_check = 0;

        match self.started {
            Some(start) if start.elapsed() >= self.limit => SearchCommand::Stop,
            _ => SearchCommand::Continue,
        }
    }

    fn on_search_end(&mut self, _stats: &SearchStats) {
        self.started = None;
    }
}

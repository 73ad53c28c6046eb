//! Unit tests for bt-search.
//!
//! Optimality is checked against two independent oracles: exhaustive
//! simple-path enumeration on tiny agent sets, and the classic dynamic
//! programming recurrence for the optimal crossing time.

#[cfg(test)]
mod helpers {
    use rustc_hash::FxHashSet;

    use bt_core::{Agent, AgentSet, AgentSetBuilder, State, StateKey};

    use crate::{is_goal, next_states};

    pub fn set(durations: &[u32]) -> AgentSet {
        AgentSet::new(
            durations
                .iter()
                .enumerate()
                .map(|(i, &d)| Agent::new(format!("a{i}"), d)),
        )
        .unwrap()
    }

    pub fn classic_four() -> AgentSet {
        AgentSetBuilder::new()
            .add("A", 1)
            .add("B", 2)
            .add("C", 5)
            .add("D", 10)
            .build()
            .unwrap()
    }

    /// Every state reachable from the start, one representative per key.
    pub fn reachable(agents: &AgentSet) -> Vec<State> {
        let start = State::start(agents);
        let mut seen: FxHashSet<StateKey> = FxHashSet::default();
        seen.insert(start.key());
        let mut stack = vec![start];
        let mut out = vec![];
        while let Some(s) = stack.pop() {
            out.push(s);
            for n in next_states(agents, &s) {
                if seen.insert(n.key()) {
                    stack.push(n);
                }
            }
        }
        out
    }

    /// Exhaustive DFS over simple paths (no repeated key).  Returns
    /// `(min moves, min time)` over every start→goal path.
    pub fn brute_force(agents: &AgentSet) -> Option<(usize, u64)> {
        fn dfs(
            agents: &AgentSet,
            state: State,
            depth: usize,
            on_path: &mut FxHashSet<StateKey>,
            best: &mut Option<(usize, u64)>,
        ) {
            if is_goal(agents, &state) {
                let (m, t) = best.get_or_insert((depth, state.elapsed));
                *m = (*m).min(depth);
                *t = (*t).min(state.elapsed);
                return;
            }
            for n in next_states(agents, &state) {
                if on_path.insert(n.key()) {
                    dfs(agents, n, depth + 1, on_path, best);
                    on_path.remove(&n.key());
                }
            }
        }

        let start = State::start(agents);
        let mut on_path = FxHashSet::default();
        on_path.insert(start.key());
        let mut best = None;
        dfs(agents, start, 0, &mut on_path, &mut best);
        best
    }

    /// Optimal crossing time by the classic recurrence over sorted
    /// durations: the slowest agent either crosses escorted by the fastest,
    /// or the two slowest cross together after the two fastest set up.
    pub fn optimal_time(durations: &[u32]) -> u64 {
        let mut t: Vec<u64> = durations.iter().map(|&d| u64::from(d)).collect();
        t.sort_unstable();
        let n = t.len();
        if n == 0 {
            return 0;
        }
        // best[i] = optimal time for the i fastest agents.
        let mut best = vec![0u64; n + 1];
        best[1] = t[0];
        if n >= 2 {
            best[2] = t[1];
        }
        for i in 3..=n {
            let escorted = best[i - 1] + t[0] + t[i - 1];
            let paired = best[i - 2] + t[0] + 2 * t[1] + t[i - 1];
            best[i] = escorted.min(paired);
        }
        best[n]
    }

    /// Fewest crossings: every forward trip but the last needs a return.
    pub fn optimal_moves(count: usize) -> usize {
        match count {
            0 => 0,
            1 => 1,
            n => 2 * n - 3,
        }
    }
}

// ── Transition generator ──────────────────────────────────────────────────────

#[cfg(test)]
mod transition_tests {
    use bt_core::{AgentId, AgentMask, AgentSet, Side, State};

    use super::helpers::{classic_four, reachable, set};
    use crate::{enumerate_transitions, next_states, transitions, Transition};

    fn choose2(k: usize) -> usize {
        k * k.saturating_sub(1) / 2
    }

    #[test]
    fn start_of_four_yields_ten() {
        let agents = classic_four();
        let start = State::start(&agents);
        assert_eq!(next_states(&agents, &start).len(), 4 + choose2(4));
    }

    #[test]
    fn count_matches_torch_side_everywhere() {
        let agents = set(&[1, 2, 5, 10, 15]);
        for s in reachable(&agents) {
            let k = s.with_torch().len();
            assert_eq!(transitions(&agents, &s).len(), k + choose2(k), "at {s}");
        }
    }

    #[test]
    fn torch_on_destination_moves_back() {
        let agents = classic_four();
        let s = State {
            origin:      AgentMask::pair(AgentId(2), AgentId(3)),
            destination: AgentMask::pair(AgentId(0), AgentId(1)),
            torch:       Side::Destination,
            elapsed:     2,
        };
        let ts = transitions(&agents, &s);
        assert_eq!(ts.len(), 3);
        for t in &ts {
            assert_eq!(t.toward, Side::Origin);
            assert_eq!(t.state.torch, Side::Origin);
            assert!(t.movers.is_subset(s.destination));
        }
        let back_alone = ts
            .iter()
            .find(|t| t.movers == AgentMask::single(AgentId(0)))
            .unwrap();
        assert_eq!(back_alone.state.elapsed, 3);
        assert_eq!(back_alone.state.origin.len(), 3);
    }

    #[test]
    fn cost_is_slowest_mover() {
        let agents = classic_four();
        let start = State::start(&agents);
        for t in transitions(&agents, &start) {
            let slowest = t.movers.iter().map(|id| agents.duration(id)).max().unwrap();
            assert_eq!(t.cost, slowest);
            assert_eq!(t.state.elapsed, u64::from(slowest));
            assert!(t.cost >= agents.min_duration().unwrap());
        }
    }

    #[test]
    fn no_self_pairs_or_duplicates() {
        let agents = classic_four();
        let start = State::start(&agents);
        let ts = transitions(&agents, &start);
        let mut movers: Vec<u64> = ts.iter().map(|t| t.movers.bits()).collect();
        movers.sort_unstable();
        movers.dedup();
        assert_eq!(movers.len(), ts.len());
        assert!(ts.iter().all(|t| (1..=2).contains(&t.movers.len())));
    }

    #[test]
    fn single_holder_only_crosses_alone() {
        let agents = set(&[3, 4]);
        let s = State {
            origin:      AgentMask::single(AgentId(1)),
            destination: AgentMask::single(AgentId(0)),
            torch:       Side::Destination,
            elapsed:     4,
        };
        let ts = transitions(&agents, &s);
        assert_eq!(ts.len(), 1);
        assert_eq!(ts[0].movers, AgentMask::single(AgentId(0)));
        assert_eq!(ts[0].state.elapsed, 7);
    }

    #[test]
    fn empty_torch_side_yields_nothing() {
        let agents = set(&[1, 2]);
        let s = State {
            origin:      agents.all(),
            destination: AgentMask::EMPTY,
            torch:       Side::Destination,
            elapsed:     0,
        };
        assert!(transitions(&agents, &s).is_empty());
        assert!(enumerate_transitions(&AgentSet::empty(), &State::start(&AgentSet::empty())).is_empty());
    }

    #[test]
    fn invariants_hold_for_all_reachable_states() {
        let agents = set(&[1, 2, 5, 10, 15, 20]);
        for s in reachable(&agents) {
            assert!(s.is_consistent(&agents), "{s}");
        }
    }

    #[test]
    fn between_recovers_each_transition() {
        let agents = classic_four();
        let start = State::start(&agents);
        for t in transitions(&agents, &start) {
            assert_eq!(Transition::between(&agents, &start, &t.state), Some(t));
        }
    }

    #[test]
    fn between_rejects_illegal_steps() {
        let agents = classic_four();
        let start = State::start(&agents);

        // Torch does not move.
        assert_eq!(Transition::between(&agents, &start, &start), None);

        // Three movers.
        let three = AgentMask::first(3);
        let too_many = State {
            origin:      agents.all().difference(three),
            destination: three,
            torch:       Side::Destination,
            elapsed:     5,
        };
        assert_eq!(Transition::between(&agents, &start, &too_many), None);

        // Right movers, wrong elapsed.
        let pair = AgentMask::pair(AgentId(0), AgentId(1));
        let wrong_time = State {
            origin:      agents.all().difference(pair),
            destination: pair,
            torch:       Side::Destination,
            elapsed:     1,
        };
        assert_eq!(Transition::between(&agents, &start, &wrong_time), None);
    }
}

// ── Goal test ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod goal_tests {
    use bt_core::{AgentMask, AgentSet, Side, State};

    use super::helpers::classic_four;
    use crate::is_goal;

    #[test]
    fn start_is_not_goal() {
        let agents = classic_four();
        assert!(!is_goal(&agents, &State::start(&agents)));
    }

    #[test]
    fn goal_ignores_torch_and_time() {
        let agents = classic_four();
        let s = State {
            origin:      AgentMask::EMPTY,
            destination: agents.all(),
            torch:       Side::Origin,
            elapsed:     1_000,
        };
        assert!(is_goal(&agents, &s));
    }

    #[test]
    fn empty_set_start_is_goal() {
        let agents = AgentSet::empty();
        assert!(is_goal(&agents, &State::start(&agents)));
    }
}

// ── Frontier policies ─────────────────────────────────────────────────────────

#[cfg(test)]
mod frontier_tests {
    use bt_core::{AgentId, AgentMask, Side, StateKey};

    use crate::{BreadthFirst, Frontier, Strategy, UniformCost};

    fn key(bits: u32, torch: Side) -> StateKey {
        let origin: AgentMask = (0..bits).map(AgentId).collect();
        StateKey { origin, destination: AgentMask::EMPTY, torch }
    }

    #[test]
    fn strategies() {
        assert_eq!(BreadthFirst::STRATEGY, Strategy::Moves);
        assert_eq!(UniformCost::STRATEGY, Strategy::Time);
        assert_eq!(Strategy::Time.to_string(), "time");
    }

    #[test]
    fn bfs_is_fifo_and_rejects_seen_keys() {
        let mut f = BreadthFirst::default();
        assert!(f.offer(key(1, Side::Origin), 9, 0));
        assert!(f.offer(key(2, Side::Origin), 1, 1));
        // Same key, cheaper: still rejected, BFS ignores cost.
        assert!(!f.offer(key(1, Side::Origin), 0, 2));
        assert!(f.offer(key(1, Side::Destination), 0, 3));
        assert_eq!(f.len(), 3);
        assert_eq!(f.next(), Some(0));
        assert_eq!(f.next(), Some(1));
        assert_eq!(f.next(), Some(3));
        assert_eq!(f.next(), None);
        assert!(f.is_empty());
    }

    #[test]
    fn ucs_pops_cheapest_first_with_fifo_ties() {
        let mut f = UniformCost::default();
        assert!(f.offer(key(1, Side::Origin), 5, 0));
        assert!(f.offer(key(2, Side::Origin), 2, 1));
        assert!(f.offer(key(3, Side::Origin), 2, 2));
        assert_eq!(f.next(), Some(1));
        assert_eq!(f.next(), Some(2));
        assert_eq!(f.next(), Some(0));
        assert_eq!(f.next(), None);
    }

    #[test]
    fn ucs_accepts_only_improvements() {
        let mut f = UniformCost::default();
        let k = key(1, Side::Origin);
        assert!(f.offer(k, 5, 0));
        assert!(!f.offer(k, 5, 1));
        assert!(!f.offer(k, 7, 2));
        assert!(f.offer(k, 3, 3));
        assert_eq!(f.best_cost(&k), Some(3));
        // The cheaper entry wins; the stale one is skipped.
        assert_eq!(f.next(), Some(3));
        assert_eq!(f.next(), None);
    }

    #[test]
    fn ucs_never_reopens_closed_key() {
        let mut f = UniformCost::default();
        let k = key(2, Side::Destination);
        assert!(f.offer(k, 4, 0));
        assert_eq!(f.next(), Some(0));
        assert!(!f.offer(k, 1, 1));
        assert_eq!(f.next(), None);
    }
}

// ── Searches ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod search_tests {
    use bt_core::{AgentSet, SearchConfig, State};

    use super::helpers::{brute_force, classic_four, optimal_moves, optimal_time, set};
    use crate::{
        is_goal, search_by_moves, search_by_time, solve, BreadthFirst, NoopObserver,
        SearchError, Strategy, Transition, UniformCost,
    };

    fn assert_well_formed(agents: &AgentSet, path: &bt_core::Path) {
        assert_eq!(path.start(), &State::start(agents));
        assert!(is_goal(agents, path.goal()));
        for w in path.states().windows(2) {
            assert!(
                Transition::between(agents, &w[0], &w[1]).is_some(),
                "illegal step {} -> {}",
                w[0],
                w[1]
            );
            assert!(w[1].elapsed > w[0].elapsed);
            assert!(w[1].is_consistent(agents));
        }
    }

    #[test]
    fn two_agents_cross_together() {
        let agents = set(&[1, 2]);
        let by_time = search_by_time(&agents).unwrap();
        assert_eq!(by_time.moves(), 1);
        assert_eq!(by_time.total_time(), 2);

        let by_moves = search_by_moves(&agents).unwrap();
        assert_eq!(by_moves.moves(), 1);
        assert_eq!(by_moves.total_time(), 2);
    }

    #[test]
    fn classic_four_takes_seventeen_minutes() {
        let agents = classic_four();
        let path = search_by_time(&agents).unwrap();
        assert_eq!(path.total_time(), 17);
        assert_eq!(path.moves(), 5);
        assert_well_formed(&agents, &path);
    }

    #[test]
    fn classic_four_bfs_takes_five_moves() {
        let agents = classic_four();
        let path = search_by_moves(&agents).unwrap();
        assert_eq!(path.moves(), 5);
        assert!(path.total_time() >= 17);
        assert_well_formed(&agents, &path);
    }

    #[test]
    fn five_people_take_twenty_eight_minutes() {
        let agents = set(&[1, 2, 5, 10, 15]);
        let path = search_by_time(&agents).unwrap();
        assert_eq!(path.total_time(), 28);
        assert_well_formed(&agents, &path);
    }

    #[test]
    fn single_agent_crosses_alone() {
        let agents = set(&[7]);
        let path = search_by_moves(&agents).unwrap();
        assert_eq!(path.moves(), 1);
        assert_eq!(path.total_time(), 7);
    }

    #[test]
    fn empty_set_is_solved_at_start() {
        let agents = AgentSet::empty();
        for path in [search_by_moves(&agents).unwrap(), search_by_time(&agents).unwrap()] {
            assert_eq!(path.moves(), 0);
            assert_eq!(path.total_time(), 0);
            assert_eq!(path.states().len(), 1);
        }
    }

    #[test]
    fn bfs_matches_brute_force_on_three() {
        let agents = set(&[1, 2, 5]);
        let (min_moves, _) = brute_force(&agents).unwrap();
        let path = search_by_moves(&agents).unwrap();
        assert_eq!(path.moves(), min_moves);
        assert_eq!(path.moves(), 3);
    }

    #[test]
    fn ucs_matches_brute_force_on_three() {
        for durations in [[1, 2, 5], [1, 1, 1], [3, 7, 8], [1, 10, 10]] {
            let agents = set(&durations);
            let (_, min_time) = brute_force(&agents).unwrap();
            let path = search_by_time(&agents).unwrap();
            assert_eq!(path.total_time(), min_time, "durations {durations:?}");
        }
    }

    #[test]
    fn repeated_runs_agree() {
        let agents = set(&[1, 2, 5, 10, 15]);
        let a = search_by_time(&agents).unwrap();
        let b = search_by_time(&agents).unwrap();
        assert_eq!(a.total_time(), b.total_time());
        let c = search_by_moves(&agents).unwrap();
        let d = search_by_moves(&agents).unwrap();
        assert_eq!(c.moves(), d.moves());
    }

    #[test]
    fn solve_reports_stats_and_strategy() {
        let agents = classic_four();
        let sol = solve::<UniformCost, _>(&agents, &SearchConfig::default(), &mut NoopObserver)
            .unwrap();
        assert_eq!(sol.strategy, Strategy::Time);
        assert!(sol.stats.expanded >= sol.path.moves() as u64);
        assert!(sol.stats.enqueued <= sol.stats.generated + 1);
        assert!(sol.stats.peak_frontier >= 1);

        let sol = solve::<BreadthFirst, _>(&agents, &SearchConfig::default(), &mut NoopObserver)
            .unwrap();
        assert_eq!(sol.strategy, Strategy::Moves);
    }

    #[test]
    fn budget_exhaustion_is_not_not_found() {
        let agents = set(&[1, 2, 5, 10, 15]);
        let cfg = SearchConfig::with_max_expansions(3);
        let err = solve::<UniformCost, _>(&agents, &cfg, &mut NoopObserver).unwrap_err();
        assert_eq!(err, SearchError::BudgetExhausted { expanded: 3 });
        assert_ne!(err, SearchError::NotFound);
    }

    #[test]
    fn oracle_recurrence_sanity() {
        assert_eq!(optimal_time(&[1, 2, 5, 10]), 17);
        assert_eq!(optimal_time(&[1, 2, 5, 10, 15]), 28);
        assert_eq!(optimal_moves(4), 5);
    }
}

// ── Observers ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use std::time::Duration;

    use bt_core::{Path, SearchConfig, State};

    use super::helpers::{classic_four, set};
    use crate::{
        solve, BreadthFirst, LogObserver, NoopObserver, SearchCommand, SearchError,
        SearchObserver, SearchStats, Strategy, TimeLimit, UniformCost,
    };

    #[derive(Default)]
    struct Recorder {
        starts:   usize,
        expands:  u64,
        goals:    Vec<u64>,
        ends:     usize,
        strategy: Option<Strategy>,
    }

    impl SearchObserver for Recorder {
        fn on_search_start(&mut self, strategy: Strategy, _start: &State) {
            self.starts += 1;
            self.strategy = Some(strategy);
        }
        fn on_expand(&mut self, _state: &State, _stats: &SearchStats) {
            self.expands += 1;
        }
        fn on_goal(&mut self, path: &Path, _stats: &SearchStats) {
            self.goals.push(path.total_time());
        }
        fn on_search_end(&mut self, _stats: &SearchStats) {
            self.ends += 1;
        }
    }

    struct StopAfter(u64);

    impl SearchObserver for StopAfter {
        fn check_termination(&mut self, stats: &SearchStats) -> SearchCommand {
            if stats.expanded >= self.0 {
                SearchCommand::Stop
            } else {
                SearchCommand::Continue
            }
        }
    }

    #[test]
    fn callbacks_fire_in_order() {
        let agents = classic_four();
        let mut rec = Recorder::default();
        let sol = solve::<UniformCost, _>(&agents, &SearchConfig::default(), &mut rec).unwrap();
        assert_eq!(rec.starts, 1);
        assert_eq!(rec.ends, 1);
        assert_eq!(rec.goals, vec![17]);
        assert_eq!(rec.strategy, Some(Strategy::Time));
        // Every expansion except the goal pop is reported.
        assert_eq!(rec.expands + 1, sol.stats.expanded);
    }

    #[test]
    fn end_fires_on_failure_too() {
        let agents = set(&[1, 2, 5]);
        let mut rec = Recorder::default();
        let cfg = SearchConfig::with_max_expansions(1);
        let err = solve::<BreadthFirst, _>(&agents, &cfg, &mut rec).unwrap_err();
        assert!(matches!(err, SearchError::BudgetExhausted { .. }));
        assert_eq!(rec.ends, 1);
        assert!(rec.goals.is_empty());
    }

    #[test]
    fn observer_stop_aborts() {
        let agents = set(&[1, 2, 5, 10]);
        let err = solve::<BreadthFirst, _>(&agents, &SearchConfig::default(), &mut StopAfter(2))
            .unwrap_err();
        assert_eq!(err, SearchError::Aborted { expanded: 2 });
    }

    #[test]
    fn pair_observer_fans_out_and_can_stop() {
        let agents = set(&[1, 2, 5, 10]);
        let mut pair = (Recorder::default(), StopAfter(1));
        let err = solve::<UniformCost, _>(&agents, &SearchConfig::default(), &mut pair).unwrap_err();
        assert_eq!(err, SearchError::Aborted { expanded: 1 });
        assert_eq!(pair.0.starts, 1);
        assert_eq!(pair.0.ends, 1);
    }

    #[test]
    fn zero_time_limit_aborts() {
        let agents = set(&[1, 2, 5, 10, 15]);
        let mut limit = TimeLimit::new(Duration::ZERO, 1);
        let err = solve::<UniformCost, _>(&agents, &SearchConfig::default(), &mut limit)
            .unwrap_err();
        assert_eq!(err, SearchError::Aborted { expanded: 0 });
    }

    #[test]
    fn generous_time_limit_lets_search_finish() {
        let agents = classic_four();
        let mut limit = TimeLimit::new(Duration::from_secs(60), 16);
        assert!(solve::<UniformCost, _>(&agents, &SearchConfig::default(), &mut limit).is_ok());
    }

    #[test]
    fn log_observer_writes_table() {
        let agents = classic_four();
        let mut log = LogObserver::new(Vec::new(), 1);
        solve::<UniformCost, _>(&agents, &SearchConfig::default(), &mut log).unwrap();
        assert!(log.take_error().is_none());
        let text = String::from_utf8(log.into_inner()).unwrap();
        assert!(text.starts_with("Strategy"));
        assert!(text.contains("time: goal reached in 5 moves, 17 min"));
        assert!(text.contains("time: search finished"));
        assert!(text.lines().filter(|l| l.starts_with("time     |")).count() > 0);
    }

    #[test]
    fn log_observer_interval_zero_skips_progress_lines() {
        let agents = classic_four();
        let mut log = LogObserver::new(Vec::new(), 0);
        solve::<BreadthFirst, _>(&agents, &SearchConfig::default(), &mut log).unwrap();
        let text = String::from_utf8(log.into_inner()).unwrap();
        assert_eq!(text.lines().filter(|l| l.starts_with("moves    |")).count(), 0);
        assert!(text.contains("moves: goal reached in 5 moves"));
    }

    #[test]
    fn noop_observer_by_reference() {
        let agents = classic_four();
        let mut noop = NoopObserver;
        let mut by_ref = &mut noop;
        assert!(solve::<BreadthFirst, _>(&agents, &SearchConfig::default(), &mut by_ref).is_ok());
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::helpers::{optimal_moves, optimal_time, reachable, set};
    use crate::{search_by_moves, search_by_time, transitions};

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn ucs_is_time_optimal(durations in prop::collection::vec(1u32..30, 0..7)) {
            let agents = set(&durations);
            let path = search_by_time(&agents).unwrap();
            prop_assert_eq!(path.total_time(), optimal_time(&durations));
        }

        #[test]
        fn bfs_is_move_optimal(durations in prop::collection::vec(1u32..30, 0..7)) {
            let agents = set(&durations);
            let path = search_by_moves(&agents).unwrap();
            prop_assert_eq!(path.moves(), optimal_moves(durations.len()));
            prop_assert!(path.total_time() >= optimal_time(&durations));
        }

        #[test]
        fn reachable_states_stay_consistent(durations in prop::collection::vec(1u32..30, 1..6)) {
            let agents = set(&durations);
            for s in reachable(&agents) {
                prop_assert!(s.is_consistent(&agents));
                for t in transitions(&agents, &s) {
                    prop_assert_eq!(t.state.elapsed - s.elapsed, u64::from(t.cost));
                    prop_assert!(t.state.is_consistent(&agents));
                }
            }
        }
    }
}

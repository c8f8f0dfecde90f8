//! The shared search loop behind all four strategies.
//!
//! BFS, DFS, best-first and A* differ only in frontier discipline and node
//! scoring. Everything else (expansion, the no-progress guard, closed-set
//! filtering, deadline polling, path reconstruction) is this one loop.

use std::time::{Duration, Instant};

use fxhash::FxHashSet;
use log::debug;

use freecell_engine::game_state::GameState;
use freecell_engine::r#move::Move;
use freecell_engine::rules::StackingRule;

use crate::frontier::Frontier;
use crate::heuristic::estimate;
use crate::node::{Arena, Node};
use crate::packed::{Equivalence, Fingerprint, LooseKey};

/// The four interchangeable graph-search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Uninformed breadth-first search (FIFO frontier).
    Bfs,
    /// Uninformed depth-first search (LIFO frontier).
    Dfs,
    /// Greedy best-first search ordered by the domain estimate.
    Best,
    /// A*: ordered by depth plus the domain estimate.
    AStar,
}

impl Strategy {
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Bfs => "bfs",
            Strategy::Dfs => "dfs",
            Strategy::Best => "best",
            Strategy::AStar => "astar",
        }
    }

    fn score(self, state: &GameState, depth: u32) -> i64 {
        match self {
            Strategy::Bfs => depth as i64,
            Strategy::Dfs => 0,
            Strategy::Best => estimate(state),
            Strategy::AStar => depth as i64 + estimate(state),
        }
    }
}

/// Everything a single search run is parameterized by.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub strategy: Strategy,
    pub stacking: StackingRule,
    pub equivalence: Equivalence,
    /// When set, states with any foundation move expand to only those
    /// moves. Unsound for A*; off by default.
    pub foundation_priority: bool,
    /// Wall-clock budget, polled at every pop.
    pub deadline: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Bfs,
            stacking: StackingRule::default(),
            equivalence: Equivalence::default(),
            foundation_priority: false,
            deadline: Duration::from_secs(15 * 60),
        }
    }
}

/// How a search run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A goal state was reached; the path is the move sequence from the
    /// initial state to it, in execution order.
    Solved(Vec<Move>),
    /// The deadline expired; carries the pop-order move trace seen so far.
    Timeout(Vec<Move>),
    /// The frontier drained without reaching a goal.
    Exhausted,
}

impl Outcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved(_))
    }
}

/// Counters collected during a run.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Nodes popped from the frontier.
    pub explored: u64,
    /// Nodes pushed onto the frontier (the root is not counted).
    pub generated: u64,
    /// Successors dropped by the no-progress guard or the closed set.
    pub pruned: u64,
    pub max_depth: u32,
    pub elapsed: Duration,
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub outcome: Outcome,
    pub stats: SearchStats,
}

/// Runs the configured strategy from `initial` until a goal is reached, the
/// frontier drains, or the deadline expires.
pub fn solve(initial: &GameState, config: &SearchConfig) -> SearchResult {
    let start = Instant::now();
    let mut stats = SearchStats::default();

    let mut arena = Arena::new();
    let mut closed: FxHashSet<Fingerprint> = FxHashSet::default();
    let mut frontier = Frontier::for_strategy(config.strategy);
    let mut trace: Vec<Move> = Vec::new();

    let root = arena.insert(Node {
        parent: None,
        mv: None,
        state: initial.clone(),
        depth: 0,
        cost: config.strategy.score(initial, 0),
    });
    closed.insert(Fingerprint::of(initial, config.equivalence));
    frontier.extend(&[(root, arena.node(root).cost)]);

    loop {
        if start.elapsed() >= config.deadline {
            stats.elapsed = start.elapsed();
            return SearchResult {
                outcome: Outcome::Timeout(trace),
                stats,
            };
        }
        let Some(id) = frontier.pop() else {
            break;
        };
        stats.explored += 1;
        if stats.explored % 100_000 == 0 {
            debug!(
                "explored {} states, frontier {}, closed {}, elapsed {:?}",
                stats.explored,
                frontier.len(),
                closed.len(),
                start.elapsed()
            );
        }

        if let Some(mv) = arena.node(id).mv {
            trace.push(mv);
        }
        if arena.node(id).state.is_goal() {
            stats.elapsed = start.elapsed();
            return SearchResult {
                outcome: Outcome::Solved(arena.path(id)),
                stats,
            };
        }

        let parent_state = arena.node(id).state.clone();
        let parent_depth = arena.node(id).depth;
        let parent_key = LooseKey::from_state(&parent_state);
        let moves = parent_state.available_moves_with(config.stacking, config.foundation_priority);

        let mut children = Vec::with_capacity(moves.len());
        for mv in moves {
            let mut next = parent_state.clone();
            if next.execute_move(&mv, config.stacking).is_err() {
                continue;
            }
            // No-progress guard: a successor indistinguishable from its
            // parent under the loose relation cannot advance the search.
            if LooseKey::from_state(&next) == parent_key {
                stats.pruned += 1;
                continue;
            }
            if !closed.insert(Fingerprint::of(&next, config.equivalence)) {
                stats.pruned += 1;
                continue;
            }
            let depth = parent_depth + 1;
            let cost = config.strategy.score(&next, depth);
            stats.generated += 1;
            stats.max_depth = stats.max_depth.max(depth);
            let child = arena.insert(Node {
                parent: Some(id),
                mv: Some(mv),
                state: next,
                depth,
                cost,
            });
            children.push((child, cost));
        }
        frontier.extend(&children);
    }

    stats.elapsed = start.elapsed();
    SearchResult {
        outcome: Outcome::Exhausted,
        stats,
    }
}

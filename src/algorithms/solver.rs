use rustc_hash::{FxHashMap, FxHashSet};

use crate::algorithms::common::PathfindingAlgorithm;
use crate::algorithms::frontier::Frontier;
use crate::algorithms::heuristic::HeuristicCache;
use crate::algorithms::node::SearchTree;
use crate::grid::{Action, Grid, Position};
use crate::statistics::SearchStats;

/// Cost of a single move.
pub const STEP_COST: f64 = 1.0;

/// Informed best-first search over a [`Grid`].
///
/// A node's cost starts at the heuristic of the start cell and every step adds
/// `STEP_COST` plus the heuristic of the cell it reaches, so the frontier is
/// ordered by steps taken plus the summed estimates of every cell on the path.
/// This always finds a route when one exists, but unlike `g + h(current)` A*
/// it can prefer a longer route when the cells along it sit closer to the exit.
pub struct Solver {
    grid: Grid,
    stats: SearchStats,
}

impl Solver {
    pub fn new(grid: Grid) -> Self {
        Solver {
            grid,
            stats: SearchStats::default(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Moves from `start` to the exit; empty if `start` is the exit or the exit
    /// cannot be reached. `start` must be a walkable cell.
    pub fn find_path(&mut self, start: Position) -> Vec<Action> {
        let grid = &self.grid;
        let exit = grid.exit();
        let mut stats = SearchStats::default();

        let mut cache = HeuristicCache::new(exit);
        let mut tree = SearchTree::new();
        let mut frontier = Frontier::new();
        let mut best_cost_seen: FxHashMap<Position, f64> = FxHashMap::default();
        // Only counts re-expansions; it never filters the frontier.
        let mut expanded: FxHashSet<Position> = FxHashSet::default();

        let root = tree.push_root(start, cache.estimate(start));
        frontier.push(root, tree[root].cost);
        stats.nodes_pushed += 1;
        log::debug!("searching from {} to {}", start, exit);

        let mut goal = None;
        while let Some(id) = frontier.pop() {
            let node = tree[id];
            stats.nodes_expanded += 1;
            if !expanded.insert(node.state) {
                stats.reexpansions += 1;
            }

            if grid.is_goal(node.state) {
                goal = Some(id);
                break;
            }
            log::trace!("expanding {} at cost {:.3}", node.state, node.cost);

            for action in Action::ALL {
                if !grid.is_legal(node.state, action) {
                    continue;
                }
                let child = grid.transition(node.state, action);
                let child_cost = node.cost + STEP_COST + cache.estimate(child);

                let improves = best_cost_seen
                    .get(&child)
                    .map_or(true, |&best| child_cost < best);
                if improves {
                    let child_id = tree.push_child(id, child, action, child_cost);
                    frontier.push(child_id, child_cost);
                    best_cost_seen.insert(child, child_cost);
                    stats.nodes_pushed += 1;
                }
            }
        }

        stats.heuristic_evaluations = cache.evaluations();
        stats.cache_hits = cache.hits();
        stats.peak_frontier = frontier.peak();
        stats.frontier_remaining = frontier.len();
        self.stats = stats;

        match goal {
            Some(goal) => {
                let actions = tree.backtrack(goal);
                log::debug!(
                    "reached exit in {} moves after expanding {} nodes",
                    actions.len(),
                    stats.nodes_expanded
                );
                actions
            }
            None => {
                log::debug!(
                    "frontier exhausted after expanding {} nodes, exit unreachable",
                    stats.nodes_expanded
                );
                Vec::new()
            }
        }
    }
}

impl PathfindingAlgorithm for Solver {
    fn find_path(&mut self, start: Position) -> Vec<Action> {
        Solver::find_path(self, start)
    }

    fn name(&self) -> &'static str {
        "solver"
    }

    fn search_stats(&self) -> SearchStats {
        self.stats
    }
}

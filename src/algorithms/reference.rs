use pathfinding::prelude::{astar, bfs};

use crate::algorithms::common::PathfindingAlgorithm;
use crate::algorithms::distance::manhattan;
use crate::grid::{Action, Grid, Position};

/// Textbook A* (`g + h`, Manhattan heuristic) using the `pathfinding` crate.
///
/// Always returns a shortest route; kept alongside [`Solver`](super::solver::Solver)
/// to compare against its cost-inflated ordering.
pub struct ReferenceAStar {
    grid: Grid,
}

impl ReferenceAStar {
    pub fn new(grid: Grid) -> Self {
        ReferenceAStar { grid }
    }
}

impl PathfindingAlgorithm for ReferenceAStar {
    fn find_path(&mut self, start: Position) -> Vec<Action> {
        let grid = &self.grid;
        let exit = grid.exit();
        let result = astar(
            &start,
            |p| successors(grid, *p).map(|next| (next, 1usize)).collect::<Vec<_>>(),
            |p| manhattan(*p, exit),
            |p| grid.is_goal(*p),
        );

        // `astar` yields `(path, cost)`; only the path is needed.
        result
            .map(|(path, _)| actions_along(&path))
            .unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "reference"
    }
}

/// Length of a shortest route from `start` to the exit, by breadth-first search.
pub fn shortest_path_len(grid: &Grid, start: Position) -> Option<usize> {
    bfs(
        &start,
        |p| successors(grid, *p).collect::<Vec<_>>(),
        |p| grid.is_goal(*p),
    )
    .map(|path| path.len() - 1)
}

fn successors(grid: &Grid, p: Position) -> impl Iterator<Item = Position> + '_ {
    Action::ALL
        .into_iter()
        .filter(move |&a| grid.is_legal(p, a))
        .map(move |a| grid.transition(p, a))
}

/// Converts consecutive adjacent positions into the moves between them.
pub fn actions_along(path: &[Position]) -> Vec<Action> {
    path.windows(2)
        .filter_map(|pair| Action::between(pair[0], pair[1]))
        .collect()
}

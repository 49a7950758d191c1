use std::time::{Duration, Instant};

use crate::algorithms::common::PathfindingAlgorithm;
use crate::algorithms::reference::{shortest_path_len, ReferenceAStar};
use crate::algorithms::solver::Solver;
use crate::config::AlgorithmKind;
use crate::grid::{Action, Cell, Grid, Position};
use crate::statistics::{SearchStats, Statistics};

#[derive(Debug, Clone)]
pub struct AlgorithmResult {
    pub name: String,
    pub actions: Vec<Action>,
    pub visited: Vec<Position>,
    pub statistics: Statistics,
    pub search_stats: SearchStats,
    pub elapsed: Duration,
    /// Replaying `actions` from the start ends on the exit without crossing a wall.
    pub success: bool,
}

pub fn create_algorithms(kind: AlgorithmKind, grid: &Grid) -> Vec<Box<dyn PathfindingAlgorithm>> {
    let mut algorithms: Vec<Box<dyn PathfindingAlgorithm>> = Vec::new();
    if matches!(kind, AlgorithmKind::Solver | AlgorithmKind::All) {
        algorithms.push(Box::new(Solver::new(grid.clone())));
    }
    if matches!(kind, AlgorithmKind::Reference | AlgorithmKind::All) {
        algorithms.push(Box::new(ReferenceAStar::new(grid.clone())));
    }
    algorithms
}

/// Runs one algorithm from `start` and checks its answer by replaying it on `grid`.
pub fn run_algorithm(
    algorithm: &mut dyn PathfindingAlgorithm,
    grid: &Grid,
    start: Position,
    optimal_path_length: Option<usize>,
) -> AlgorithmResult {
    let started = Instant::now();
    let actions = algorithm.find_path(start);
    let elapsed = started.elapsed();

    let visited = grid.replay(start, &actions);
    let success = reaches_exit(grid, &visited);
    log::info!(
        "{}: {} moves in {:.2?} (reaches exit: {})",
        algorithm.name(),
        actions.len(),
        elapsed,
        success
    );

    AlgorithmResult {
        name: algorithm.name().to_string(),
        statistics: Statistics::new(actions.len(), optimal_path_length),
        search_stats: algorithm.search_stats(),
        actions,
        visited,
        elapsed,
        success,
    }
}

/// Runs every algorithm selected by `kind` against the same grid and start.
pub fn run_all(kind: AlgorithmKind, grid: &Grid, start: Position) -> Vec<AlgorithmResult> {
    let optimal_path_length = shortest_path_len(grid, start);
    create_algorithms(kind, grid)
        .iter_mut()
        .map(|algorithm| run_algorithm(algorithm.as_mut(), grid, start, optimal_path_length))
        .collect()
}

fn reaches_exit(grid: &Grid, visited: &[Position]) -> bool {
    let clean = visited
        .iter()
        .all(|&p| matches!(grid.cell(p), Some(cell) if cell != Cell::Wall));
    clean && visited.last().is_some_and(|&p| grid.is_goal(p))
}

pub fn format_actions(actions: &[Action]) -> String {
    actions.iter().map(|a| a.symbol()).collect()
}

pub fn print_comparison_results(results: &[AlgorithmResult]) {
    println!("\n=== ALGORITHM COMPARISON RESULTS ===");
    println!();
    println!(
        "{:<12} {:<8} {:<8} {:<8} {:<12} {:<10} {:<10} {:<12}",
        "Algorithm", "Success", "Moves", "Optimal", "Efficiency", "Expanded", "Pushed", "Time"
    );
    println!("{}", "-".repeat(86));

    for result in results {
        let success_str = if result.success { "yes" } else { "no" };
        let optimal_str = result
            .statistics
            .optimal_path_length
            .map_or_else(|| "-".to_string(), |n| n.to_string());
        println!(
            "{:<12} {:<8} {:<8} {:<8} {:<12} {:<10} {:<10} {:<12}",
            result.name,
            success_str,
            result.actions.len(),
            optimal_str,
            format!("{:.3}", result.statistics.route_efficiency),
            result.search_stats.nodes_expanded,
            result.search_stats.nodes_pushed,
            format!("{:.2?}", result.elapsed),
        );
    }

    if let [first, rest @ ..] = results {
        for other in rest {
            if other.actions.len() != first.actions.len() {
                println!(
                    "\n{} and {} disagree on route length: {} vs {} moves",
                    first.name,
                    other.name,
                    first.actions.len(),
                    other.actions.len()
                );
            }
        }
    }
}

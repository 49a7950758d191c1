//! Maze solving on a grid of walls with a single start and exit.
//!
//! - `grid`: positions, moves, cell kinds and the transition model.
//! - `algorithms`: the informed [`Solver`](algorithms::Solver), its frontier,
//!   heuristic cache and node arena, plus a reference A* for comparison.
//! - `loader` / `generator`: build grids from maze files or random seeds.
//! - `render`, `runner`, `statistics`: output and algorithm comparison for the CLI.

pub mod algorithms;
pub mod config;
pub mod error;
pub mod generator;
pub mod grid;
pub mod loader;
pub mod render;
pub mod runner;
pub mod statistics;

pub use error::MazeError;
pub use grid::{Action, Cell, Grid, Position};

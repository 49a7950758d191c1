pub mod common;
pub mod distance;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod reference;
pub mod solver;

pub use common::PathfindingAlgorithm;
pub use reference::ReferenceAStar;
pub use solver::Solver;

use crate::grid::{Action, Position};
use crate::statistics::SearchStats;

pub trait PathfindingAlgorithm {
    /// Moves leading from `start` to the exit, or an empty sequence when the
    /// exit is unreachable or `start` already is the exit.
    fn find_path(&mut self, start: Position) -> Vec<Action>;

    fn name(&self) -> &'static str;

    /// Counters from the most recent `find_path` call.
    fn search_stats(&self) -> SearchStats {
        SearchStats::default()
    }
}

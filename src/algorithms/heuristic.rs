use rustc_hash::FxHashMap;

use crate::algorithms::distance::euclidean;
use crate::grid::Position;

/// Memoised straight-line distance to a fixed exit, scoped to one search run.
///
/// Each position is computed at most once; later lookups return the stored value.
pub struct HeuristicCache {
    exit: Position,
    values: FxHashMap<Position, f64>,
    hits: usize,
}

impl HeuristicCache {
    pub fn new(exit: Position) -> Self {
        HeuristicCache {
            exit,
            values: FxHashMap::default(),
            hits: 0,
        }
    }

    pub fn estimate(&mut self, p: Position) -> f64 {
        if let Some(&value) = self.values.get(&p) {
            self.hits += 1;
            return value;
        }
        let value = euclidean(p, self.exit);
        self.values.insert(p, value);
        value
    }

    /// Number of distinct positions computed so far.
    pub fn evaluations(&self) -> usize {
        self.values.len()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_is_euclidean_distance() {
        let mut cache = HeuristicCache::new(Position::new(5, 5));
        assert_eq!(cache.estimate(Position::new(2, 1)), 5.0);
        assert_eq!(cache.estimate(Position::new(5, 5)), 0.0);
    }

    #[test]
    fn repeated_lookups_are_memoised() {
        let mut cache = HeuristicCache::new(Position::new(5, 5));
        let p = Position::new(1, 3);
        let first = cache.estimate(p);
        let second = cache.estimate(p);
        assert_eq!(first.to_bits(), second.to_bits());
        assert_eq!(cache.evaluations(), 1);
        assert_eq!(cache.hits(), 1);

        cache.estimate(Position::new(3, 1));
        assert_eq!(cache.evaluations(), 2);
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn anti_diagonal_positions_get_separate_entries() {
        let mut cache = HeuristicCache::new(Position::new(0, 0));
        let a = cache.estimate(Position::new(1, 3));
        let b = cache.estimate(Position::new(3, 1));
        let c = cache.estimate(Position::new(2, 2));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(cache.evaluations(), 3);
    }
}

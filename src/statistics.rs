use std::fmt;

/// Counters collected during a single search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes_expanded: usize,
    pub nodes_pushed: usize,
    /// Pops of a position that had already been expanded earlier in the run.
    pub reexpansions: usize,
    pub heuristic_evaluations: usize,
    pub cache_hits: usize,
    pub peak_frontier: usize,
    /// Entries still queued when the search stopped; zero after an exhaustive failure.
    pub frontier_remaining: usize,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Nodes expanded: {}", self.nodes_expanded)?;
        writeln!(f, "Nodes pushed: {}", self.nodes_pushed)?;
        writeln!(f, "Re-expansions: {}", self.reexpansions)?;
        writeln!(
            f,
            "Heuristic evaluations: {} ({} cache hits)",
            self.heuristic_evaluations, self.cache_hits
        )?;
        writeln!(f, "Peak frontier size: {}", self.peak_frontier)?;
        writeln!(f, "Frontier remaining: {}", self.frontier_remaining)?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Statistics {
    pub path_length: usize,
    /// `None` when the exit is unreachable.
    pub optimal_path_length: Option<usize>,
    pub route_efficiency: f64,
}

impl Statistics {
    pub fn new(path_length: usize, optimal_path_length: Option<usize>) -> Self {
        let mut stats = Statistics {
            path_length,
            optimal_path_length,
            route_efficiency: 0.0,
        };
        stats.calculate_efficiency();
        stats
    }

    pub fn calculate_efficiency(&mut self) {
        self.route_efficiency = match self.optimal_path_length {
            Some(optimal) if optimal > 0 && self.path_length > 0 => {
                self.path_length as f64 / optimal as f64
            }
            _ => 0.0,
        };
    }

    pub fn extra_moves(&self) -> usize {
        self.optimal_path_length
            .map_or(0, |optimal| self.path_length.saturating_sub(optimal))
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Path Length: {}", self.path_length)?;
        match self.optimal_path_length {
            Some(optimal) => writeln!(f, "Optimal Path Length: {}", optimal)?,
            None => writeln!(f, "Optimal Path Length: unreachable")?,
        }
        writeln!(f, "Route Efficiency: {:.3}", self.route_efficiency)?;
        if self.extra_moves() > 0 {
            writeln!(f, "Extra moves over the shortest route: {}", self.extra_moves())?;
        }
        Ok(())
    }
}

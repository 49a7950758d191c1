use crate::grid::Position;

/// Straight-line (L2) distance between two positions.
#[inline]
pub fn euclidean(a: Position, b: Position) -> f64 {
    let dr = a.row.abs_diff(b.row) as f64;
    let dc = a.col.abs_diff(b.col) as f64;
    (dr * dr + dc * dc).sqrt()
}

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Position, b: Position) -> usize {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

use rustc_hash::FxHashSet;

use crate::grid::{Cell, Grid, Position};

pub const PATH_MARK: char = '*';

/// Text picture of the grid in maze-file symbols, with `path` cells marked `*`.
///
/// Start and exit keep their own symbols even when the path crosses them.
pub fn render_grid(grid: &Grid, path: &[Position]) -> String {
    let on_path: FxHashSet<Position> = path.iter().copied().collect();
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for (row, cells) in grid.rows().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            let symbol = match cell {
                Cell::Path if on_path.contains(&Position::new(row, col)) => PATH_MARK,
                other => other.symbol(),
            };
            out.push(symbol);
        }
        out.push('\n');
    }
    out
}

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::MazeError;
use crate::grid::{Action, Cell, Grid, Position};

/// Generate a random maze with the start at (1,1) and the exit at the opposite corner.
///
/// Rooms sit on odd coordinates and are carved with a randomised depth-first
/// backtracker, which yields exactly one route between any two rooms. `loops`
/// extra walls are then knocked out between open cells to add alternative routes.
/// Passing a seed makes the layout reproducible.
pub fn generate_maze(
    rows: usize,
    cols: usize,
    loops: usize,
    seed: Option<u64>,
) -> Result<Grid, MazeError> {
    if rows % 2 == 0 || cols % 2 == 0 {
        return Err(MazeError::EvenDimensions { rows, cols });
    }
    if rows < 3 || cols < 3 || (rows == 3 && cols == 3) {
        return Err(MazeError::TooSmall { rows, cols });
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut cells = vec![vec![Cell::Wall; cols]; rows];
    let is_room = |p: Position| p.row > 0 && p.row < rows - 1 && p.col > 0 && p.col < cols - 1;

    let origin = Position::new(1, 1);
    cells[origin.row][origin.col] = Cell::Path;
    let mut stack = vec![origin];
    while let Some(&current) = stack.last() {
        let options: Vec<(Position, Position)> = Action::ALL
            .into_iter()
            .filter_map(|action| {
                let wall = current.moved(action);
                let next = wall.moved(action);
                (is_room(next) && cells[next.row][next.col] == Cell::Wall).then_some((wall, next))
            })
            .collect();

        if options.is_empty() {
            stack.pop();
            continue;
        }
        let (wall, next) = options[rng.gen_range(0..options.len())];
        cells[wall.row][wall.col] = Cell::Path;
        cells[next.row][next.col] = Cell::Path;
        stack.push(next);
    }

    // Knock out separating walls: exactly one of row/col is even, inside the border.
    let is_separator = |row: usize, col: usize| (row % 2 == 0) != (col % 2 == 0);
    let closed = (1..rows - 1)
        .flat_map(|row| (1..cols - 1).map(move |col| (row, col)))
        .filter(|&(row, col)| is_separator(row, col) && cells[row][col] == Cell::Wall)
        .count();
    let loops = loops.min(closed);
    let mut opened = 0;
    let mut attempts = 0usize;
    while opened < loops && attempts < loops.saturating_mul(10) {
        attempts += 1;
        let row = rng.gen_range(1..rows - 1);
        let col = rng.gen_range(1..cols - 1);
        if !is_separator(row, col) || cells[row][col] != Cell::Wall {
            continue;
        }
        cells[row][col] = Cell::Path;
        opened += 1;
    }

    let start = origin;
    let exit = Position::new(rows - 2, cols - 2);
    cells[start.row][start.col] = Cell::Start;
    cells[exit.row][exit.col] = Cell::Exit;

    log::debug!(
        "generated {}x{} maze with {} extra openings (seed {:?})",
        rows,
        cols,
        opened,
        seed
    );
    Ok(Grid::new(cells, start, exit))
}

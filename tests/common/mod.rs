#![allow(dead_code)]

use maze_solver::loader::grid_from_rows;
use maze_solver::{Action, Cell, Grid, Position};

/// Single corridor turning through (1,3), (3,3) and (3,5) down to the exit.
pub fn corridor() -> Grid {
    grid_from_rows(&[
        "#######",
        "#S  ###",
        "### ###",
        "###   #",
        "##### #",
        "#####E#",
        "#######",
    ])
    .unwrap()
}

pub fn maze001() -> Grid {
    grid_from_rows(&[
        "#######",
        "#S#   #",
        "# ### #",
        "# #   #",
        "# # # #",
        "#   #E#",
        "#######",
    ])
    .unwrap()
}

/// Start and exit on opposite sides of a solid wall.
pub fn disconnected() -> Grid {
    grid_from_rows(&[
        "#########",
        "#S      #",
        "#       #",
        "#########",
        "#      E#",
        "#########",
        "#########",
    ])
    .unwrap()
}

/// Replays `actions` one move at a time, asserting that no step lands on a
/// wall, and returns the final position.
pub fn replay_checked(grid: &Grid, start: Position, actions: &[Action]) -> Position {
    let mut current = start;
    for (i, &action) in actions.iter().enumerate() {
        assert!(
            grid.is_legal(current, action),
            "move {} ({:?}) from {} is illegal",
            i,
            action,
            current
        );
        current = grid.transition(current, action);
        assert_ne!(grid.cell(current), Some(Cell::Wall));
        assert_ne!(grid.cell(current), None);
    }
    current
}

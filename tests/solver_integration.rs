mod common;

use maze_solver::algorithms::reference::shortest_path_len;
use maze_solver::algorithms::{PathfindingAlgorithm, ReferenceAStar, Solver};
use maze_solver::generator::generate_maze;
use maze_solver::{Action, Position};

use common::{corridor, disconnected, maze001, replay_checked};

#[test]
fn corridor_path_matches_unique_route() {
    let grid = corridor();
    let start = grid.start();
    let expected = shortest_path_len(&grid, start).unwrap();
    assert_eq!(expected, 8);

    let mut solver = Solver::new(grid.clone());
    let path = solver.find_path(start);
    assert_eq!(path.len(), expected);
    let end = replay_checked(&grid, start, &path);
    assert_eq!(end, grid.exit());
    assert_eq!(end, Position::new(5, 5));
}

#[test]
fn maze001_is_solved_in_twelve_moves() {
    let grid = maze001();
    let start = grid.start();
    let mut solver = Solver::new(grid.clone());
    let path = solver.find_path(start);
    use Action::*;
    assert_eq!(
        path,
        vec![Down, Down, Down, Down, Right, Right, Up, Up, Right, Right, Down, Down]
    );
    assert!(grid.is_goal(replay_checked(&grid, start, &path)));
}

#[test]
fn disconnected_maze_has_no_route() {
    let grid = disconnected();
    let start = grid.start();
    let mut solver = Solver::new(grid);
    assert!(solver.find_path(start).is_empty());
    assert_eq!(solver.stats().frontier_remaining, 0);
}

#[test]
fn start_equal_to_exit_needs_no_moves() {
    let grid = maze001();
    let exit = grid.exit();
    let mut solver = Solver::new(grid);
    assert!(solver.find_path(exit).is_empty());
}

#[test]
fn perfect_mazes_get_shortest_routes() {
    for seed in 0..20 {
        let grid = generate_maze(21, 31, 0, Some(seed)).unwrap();
        let start = grid.start();
        let optimal = shortest_path_len(&grid, start).unwrap();

        let mut solver = Solver::new(grid.clone());
        let path = solver.find_path(start);
        assert_eq!(path.len(), optimal, "seed {}", seed);
        assert_eq!(replay_checked(&grid, start, &path), grid.exit());
    }
}

#[test]
fn looped_mazes_get_valid_routes() {
    for seed in 0..20 {
        let grid = generate_maze(25, 25, 40, Some(seed)).unwrap();
        let start = grid.start();
        let optimal = shortest_path_len(&grid, start).unwrap();

        let mut solver = Solver::new(grid.clone());
        let path = solver.find_path(start);
        assert!(path.len() >= optimal, "seed {}", seed);
        assert_eq!(replay_checked(&grid, start, &path), grid.exit());

        let mut reference = ReferenceAStar::new(grid.clone());
        assert_eq!(reference.find_path(start).len(), optimal, "seed {}", seed);
    }
}

#[test]
fn heuristic_cache_bounded_by_walkable_cells() {
    let grid = generate_maze(31, 31, 30, Some(11)).unwrap();
    let walkable = (0..grid.height())
        .flat_map(|row| (0..grid.width()).map(move |col| Position::new(row, col)))
        .filter(|&p| grid.is_walkable(p))
        .count();
    let start = grid.start();
    let mut solver = Solver::new(grid);
    solver.find_path(start);
    let stats = solver.search_stats();
    assert!(stats.heuristic_evaluations <= walkable);
    assert!(stats.nodes_pushed >= stats.heuristic_evaluations - 1);
}

#[test]
fn solves_from_arbitrary_walkable_positions() {
    let grid = generate_maze(15, 15, 10, Some(5)).unwrap();
    let mut solver = Solver::new(grid.clone());
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let p = Position::new(row, col);
            if !grid.is_walkable(p) {
                continue;
            }
            let path = solver.find_path(p);
            assert_eq!(replay_checked(&grid, p, &path), grid.exit(), "from {}", p);
        }
    }
}

#[test]
fn summed_estimates_can_prefer_a_longer_route() {
    // Row 3 passes right beside the exit, so its cells add small estimates even
    // though that route has to climb back over the wall in column 6.
    let grid = maze_solver::loader::grid_from_rows(&[
        "# #     #",
        "    # #  ",
        "S#    #  ",
        "      # #",
        "   # #E #",
    ])
    .unwrap();
    let start = grid.start();
    assert_eq!(shortest_path_len(&grid, start), Some(14));

    let mut solver = Solver::new(grid.clone());
    let path = solver.find_path(start);
    use Action::*;
    assert_eq!(
        path,
        vec![
            Down, Right, Right, Right, Right, Right, Up, Up, Up, Right, Right, Down, Down, Down,
            Down, Left
        ]
    );
    assert_eq!(replay_checked(&grid, start, &path), grid.exit());

    let mut reference = ReferenceAStar::new(grid.clone());
    let optimal = reference.find_path(start);
    assert_eq!(optimal.len(), 14);
    assert_eq!(replay_checked(&grid, start, &optimal), grid.exit());
}

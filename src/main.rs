use anyhow::{bail, Context};
use clap::Parser;

use maze_solver::config::{AlgorithmKind, Config};
use maze_solver::generator::generate_maze;
use maze_solver::loader::load_maze;
use maze_solver::render::render_grid;
use maze_solver::runner::{format_actions, print_comparison_results, run_all};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = Config::parse();

    let grid = match &config.maze_file {
        Some(path) if !config.generate => load_maze(path)
            .with_context(|| format!("could not load maze from {}", path.display()))?,
        _ => generate_maze(config.rows, config.cols, config.loops, config.seed)
            .context("could not generate maze")?,
    };

    let start = config.start.unwrap_or(grid.start());
    if !grid.is_walkable(start) {
        bail!(
            "start position {} is a wall or outside the {}x{} maze",
            start,
            grid.height(),
            grid.width()
        );
    }

    if !config.quiet {
        println!("Maze: {}x{}", grid.height(), grid.width());
        println!("Start: {}, Exit: {}", start, grid.exit());
        println!("Algorithm: {:?}", config.algorithm);
        println!();
    }

    let results = run_all(config.algorithm, &grid, start);

    for result in &results {
        if result.actions.is_empty() && !grid.is_goal(start) {
            println!("{}: no route to the exit exists", result.name);
            continue;
        }
        println!(
            "{} solution ({} moves): {}",
            result.name,
            result.actions.len(),
            format_actions(&result.actions)
        );
        if !config.quiet {
            println!("\n=== FINAL RESULTS ===");
            print!("{}", result.statistics);
            print!("{}", result.search_stats);
            println!("Time in find_path: {:.2?}", result.elapsed);
        }
        if !config.no_render {
            println!();
            print!("{}", render_grid(&grid, &result.visited));
        }
        println!();
    }

    if config.algorithm == AlgorithmKind::All {
        print_comparison_results(&results);
    }

    Ok(())
}

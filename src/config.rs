use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::grid::Position;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    /// Informed search with accumulated heuristic costs
    Solver,
    /// Textbook A* from the `pathfinding` crate
    Reference,
    /// Run both and compare
    All,
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Find a route through a maze of walls", long_about = None)]
pub struct Config {
    /// Maze file: a "<rows> <cols>" line followed by rows of '#', ' ', '.', 'S', 'E'
    pub maze_file: Option<PathBuf>,

    /// Generate a random maze instead of loading one
    #[arg(long, default_value_t = false, conflicts_with = "maze_file")]
    pub generate: bool,

    #[arg(long, default_value_t = 21)]
    pub rows: usize,

    #[arg(long, default_value_t = 21)]
    pub cols: usize,

    /// Extra walls to knock out in a generated maze, creating alternative routes
    #[arg(long, default_value_t = 0)]
    pub loops: usize,

    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = AlgorithmKind::Solver)]
    pub algorithm: AlgorithmKind,

    /// Search from ROW,COL instead of the maze's start cell
    #[arg(long, value_parser = parse_position)]
    pub start: Option<Position>,

    #[arg(long, default_value_t = false)]
    pub no_render: bool,

    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

fn parse_position(s: &str) -> Result<Position, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {:?}", s))?;
    let row = row
        .trim()
        .parse()
        .map_err(|e| format!("invalid row {:?}: {}", row, e))?;
    let col = col
        .trim()
        .parse()
        .map_err(|e| format!("invalid column {:?}: {}", col, e))?;
    Ok(Position::new(row, col))
}

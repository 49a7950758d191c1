//! Reads maze text files into [`Grid`] values.
//!
//! The format is a `"<rows> <cols>"` header followed by `rows` lines of exactly
//! `cols` characters: `#` wall, ` ` or `.` path, `S` start, `E` exit.

use std::fs;
use std::path::Path;

use crate::error::MazeError;
use crate::grid::{Cell, Grid, Position};

pub fn load_maze(path: impl AsRef<Path>) -> Result<Grid, MazeError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| MazeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded {} bytes from {}", text.len(), path.display());
    parse_maze(&text)
}

pub fn parse_maze(text: &str) -> Result<Grid, MazeError> {
    let mut lines = text.lines();
    let header = lines.next().ok_or(MazeError::MissingHeader)?;
    let (rows, cols) = parse_header(header)?;

    let body: Vec<&str> = lines.collect();
    // Tolerate a trailing blank line left by editors.
    let body = match body.split_last() {
        Some((last, rest)) if last.is_empty() && rest.len() == rows => rest,
        _ => &body[..],
    };

    for (i, line) in body.iter().enumerate() {
        if i >= rows || line.chars().count() != cols {
            return Err(MazeError::SizeMismatch {
                expected: (rows, cols),
                line: i + 2,
            });
        }
    }
    if body.len() != rows {
        return Err(MazeError::SizeMismatch {
            expected: (rows, cols),
            line: body.len() + 2,
        });
    }

    grid_from_rows(body)
}

fn parse_header(header: &str) -> Result<(usize, usize), MazeError> {
    let invalid = || MazeError::InvalidHeader(header.to_string());
    let mut parts = header.split_whitespace();
    let rows: i64 = parts.next().ok_or_else(invalid)?.parse().map_err(|_| invalid())?;
    let cols: i64 = parts.next().ok_or_else(invalid)?.parse().map_err(|_| invalid())?;
    if parts.next().is_some() {
        return Err(invalid());
    }
    if rows <= 0 || cols <= 0 || rows % 2 == 0 || cols % 2 == 0 {
        return Err(MazeError::EvenDimensions {
            rows: rows.max(0) as usize,
            cols: cols.max(0) as usize,
        });
    }
    Ok((rows as usize, cols as usize))
}

/// Builds a grid from header-less rows, checking symbols and the start/exit cells.
///
/// Every row must be as wide as the first; dimension parity is only checked by
/// [`parse_maze`] against the declared header.
pub fn grid_from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Grid, MazeError> {
    let mut cells = Vec::with_capacity(rows.len());
    let mut start = None;
    let mut exit = None;
    let width = rows.first().map_or(0, |r| r.as_ref().chars().count());

    for (r, line) in rows.iter().enumerate() {
        let line = line.as_ref();
        if line.chars().count() != width {
            return Err(MazeError::SizeMismatch {
                expected: (rows.len(), width),
                line: r + 1,
            });
        }
        let mut row = Vec::with_capacity(width);
        for (c, ch) in line.chars().enumerate() {
            let cell = match ch {
                '#' => Cell::Wall,
                ' ' | '.' => Cell::Path,
                'S' => Cell::Start,
                'E' => Cell::Exit,
                _ => return Err(MazeError::IllegalCharacter { ch, row: r, col: c }),
            };
            match cell {
                Cell::Start if start.is_some() => return Err(MazeError::DuplicateStart),
                Cell::Start => start = Some(Position::new(r, c)),
                Cell::Exit if exit.is_some() => return Err(MazeError::DuplicateExit),
                Cell::Exit => exit = Some(Position::new(r, c)),
                _ => {}
            }
            row.push(cell);
        }
        cells.push(row);
    }

    let start = start.ok_or(MazeError::MissingStart)?;
    let exit = exit.ok_or(MazeError::MissingExit)?;
    Ok(Grid::new(cells, start, exit))
}

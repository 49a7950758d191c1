use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Reasons a maze could not be loaded or generated.
#[derive(Debug)]
pub enum MazeError {
    Io { path: PathBuf, source: io::Error },
    MissingHeader,
    InvalidHeader(String),
    EvenDimensions { rows: usize, cols: usize },
    SizeMismatch { expected: (usize, usize), line: usize },
    IllegalCharacter { ch: char, row: usize, col: usize },
    MissingStart,
    MissingExit,
    DuplicateStart,
    DuplicateExit,
    TooSmall { rows: usize, cols: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            MazeError::MissingHeader => write!(f, "maze file is empty, expected \"<rows> <cols>\""),
            MazeError::InvalidHeader(line) => {
                write!(f, "invalid dimensions line {:?}, expected \"<rows> <cols>\"", line)
            }
            MazeError::EvenDimensions { rows, cols } => write!(
                f,
                "maze dimensions must be positive odd numbers, got {}x{}",
                rows, cols
            ),
            MazeError::SizeMismatch { expected, line } => write!(
                f,
                "maze data does not match the declared size {}x{} (line {})",
                expected.0, expected.1, line
            ),
            MazeError::IllegalCharacter { ch, row, col } => {
                write!(f, "illegal character {:?} at row {}, column {}", ch, row, col)
            }
            MazeError::MissingStart => write!(f, "maze has no start cell 'S'"),
            MazeError::MissingExit => write!(f, "maze has no exit cell 'E'"),
            MazeError::DuplicateStart => write!(f, "maze has more than one start cell 'S'"),
            MazeError::DuplicateExit => write!(f, "maze has more than one exit cell 'E'"),
            MazeError::TooSmall { rows, cols } => write!(
                f,
                "cannot generate a {}x{} maze, need odd dimensions of at least 3 \
                 and more than one open cell",
                rows, cols
            ),
        }
    }
}

impl Error for MazeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MazeError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

use std::fmt;

/// A (row, column) coordinate identifying a grid cell.
///
/// Equality and hashing cover both coordinates, so two positions on the same
/// anti-diagonal never share a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// The position one cell away in the direction of `action`.
    ///
    /// No bounds checking: stepping off row or column 0 wraps to `usize::MAX`,
    /// which no grid contains.
    pub fn moved(self, action: Action) -> Position {
        match action {
            Action::Up => Position::new(self.row.wrapping_sub(1), self.col),
            Action::Down => Position::new(self.row.wrapping_add(1), self.col),
            Action::Left => Position::new(self.row, self.col.wrapping_sub(1)),
            Action::Right => Position::new(self.row, self.col.wrapping_add(1)),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// One of the four moves available from any cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// Expansion order used by the searches.
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// The action that moves `from` onto the adjacent `to`, if they are adjacent.
    pub fn between(from: Position, to: Position) -> Option<Action> {
        Action::ALL.into_iter().find(|&a| from.moved(a) == to)
    }

    pub fn symbol(self) -> char {
        match self {
            Action::Up => 'u',
            Action::Down => 'd',
            Action::Left => 'l',
            Action::Right => 'r',
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Path,
    Start,
    Exit,
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Path => ' ',
            Cell::Start => 'S',
            Cell::Exit => 'E',
        }
    }
}

/// The static maze a search runs over.
///
/// A `Grid` is assumed to be well formed (odd dimensions, exactly one start and
/// one exit); the loader and generator enforce that before constructing one.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Vec<Cell>>,
    start: Position,
    exit: Position,
}

impl Grid {
    pub fn new(cells: Vec<Vec<Cell>>, start: Position, exit: Position) -> Self {
        let height = cells.len();
        let width = cells.first().map_or(0, Vec::len);
        Grid {
            height,
            width,
            cells,
            start,
            exit,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn exit(&self) -> Position {
        self.exit
    }

    /// Cell kind at `p`, or `None` outside the grid.
    pub fn cell(&self, p: Position) -> Option<Cell> {
        self.cells.get(p.row).and_then(|row| row.get(p.col)).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    pub fn is_inside(&self, p: Position) -> bool {
        p.row < self.height && p.col < self.width
    }

    pub fn is_walkable(&self, p: Position) -> bool {
        matches!(self.cell(p), Some(cell) if cell != Cell::Wall)
    }

    pub fn step(&self, p: Position, action: Action) -> Position {
        p.moved(action)
    }

    /// Where `action` takes `p`; bumping into a wall or the border leaves `p` unchanged.
    pub fn transition(&self, p: Position, action: Action) -> Position {
        let next = self.step(p, action);
        if self.is_walkable(next) {
            next
        } else {
            p
        }
    }

    pub fn is_legal(&self, p: Position, action: Action) -> bool {
        self.transition(p, action) != p
    }

    pub fn is_goal(&self, p: Position) -> bool {
        p == self.exit
    }

    /// Every position visited when playing `actions` from `start`, `start` included.
    pub fn replay(&self, start: Position, actions: &[Action]) -> Vec<Position> {
        let mut visited = Vec::with_capacity(actions.len() + 1);
        let mut current = start;
        visited.push(current);
        for &action in actions {
            current = self.transition(current, action);
            visited.push(current);
        }
        visited
    }
}

use crate::consts::{BOARD_HEIGHT, BOARD_WIDTH, CELL_SIZE, GRID_HEIGHT, GRID_WIDTH};

/// A board cell in pixel coordinates. Both components are multiples of
/// [`CELL_SIZE`] and lie inside the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const ORIGIN: Cell = Cell { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    /// Builds a cell from grid column and row.
    pub const fn at(column: i32, row: i32) -> Self {
        Cell {
            x: column * CELL_SIZE,
            y: row * CELL_SIZE,
        }
    }

    pub fn column(self) -> i32 {
        self.x / CELL_SIZE
    }

    pub fn row(self) -> i32 {
        self.y / CELL_SIZE
    }

    /// The neighbouring cell in `direction`. Leaving one edge of the board
    /// re-enters from the opposite edge.
    pub fn step(self, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell {
            x: (self.x + dx * CELL_SIZE).rem_euclid(BOARD_WIDTH),
            y: (self.y + dy * CELL_SIZE).rem_euclid(BOARD_HEIGHT),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

pub fn center() -> Cell {
    Cell::new(BOARD_WIDTH / 2, BOARD_HEIGHT / 2)
}

/// Every cell of the board, row by row.
pub fn cells() -> impl Iterator<Item = Cell> {
    (0..GRID_HEIGHT).flat_map(|row| (0..GRID_WIDTH).map(move |column| Cell::at(column, row)))
}

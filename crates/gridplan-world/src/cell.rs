use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Coordinates of one square on the board, counted from the top-left corner.
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Compass move attempted from a free cell.
pub enum Move {
    North,
    South,
    East,
    West,
}

impl Move {
    /// All moves, in the order they are offered from every free cell.
    pub const ALL: [Move; 4] = [Move::North, Move::South, Move::East, Move::West];

    /// Row and column offset of the intended step.
    pub(crate) fn delta(self) -> (isize, isize) {
        match self {
            Move::North => (-1, 0),
            Move::South => (1, 0),
            Move::East => (0, 1),
            Move::West => (0, -1),
        }
    }

    /// The move one quarter turn counter-clockwise of this one.
    pub fn slip_left(self) -> Move {
        match self {
            Move::North => Move::West,
            Move::West => Move::South,
            Move::South => Move::East,
            Move::East => Move::North,
        }
    }

    /// The move one quarter turn clockwise of this one.
    pub fn slip_right(self) -> Move {
        match self {
            Move::North => Move::East,
            Move::East => Move::South,
            Move::South => Move::West,
            Move::West => Move::North,
        }
    }
}

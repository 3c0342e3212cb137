use super::board::BOARD_SIZE;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One side of the game. Black always opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// The cell state a piece of this color occupies.
    pub fn cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// Occupancy of a single square. Absence of a piece is a cell state, not a
/// player state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Black,
    White,
}

/// Board coordinate, 0-indexed, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    pub fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Steps one square along a (row, col) direction; `None` at the edge.
    pub fn offset(self, (dr, dc): (i32, i32)) -> Option<Position> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        if (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col) {
            Some(Position::new(row as usize, col as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Computer strength, fixed at game creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// One-ply greedy search.
    Easy,
    /// Minimax, depth 3 by default.
    Medium,
    /// Minimax, depth 4 by default.
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

/// Everything the engine can report to its caller. None of these are fatal:
/// reject the input, or treat `NoLegalMove` as a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Placement on an occupied or non-flipping square.
    InvalidMove,
    /// Coordinate outside the 8x8 grid.
    OutOfRange,
    /// A move was requested for a side that has none.
    NoLegalMove,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::InvalidMove => write!(f, "invalid move"),
            GameError::OutOfRange => write!(f, "coordinate out of range"),
            GameError::NoLegalMove => write!(f, "no legal move available"),
        }
    }
}

impl std::error::Error for GameError {}

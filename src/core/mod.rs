pub mod board;
pub mod types;

pub use board::{Board, BOARD_SIZE};
pub use types::{Cell, Difficulty, GameError, Player, Position};

//! 8x8 Reversi engine: board rules, positional evaluation, alpha-beta
//! search and the turn state machine, plus a crossterm terminal front-end.
//!
//! The engine proper lives in [`core`], [`logic`], [`player::ai`] and
//! [`game`]; [`display`] and [`player::tui`] are the presentation layer the
//! binary wires together.

pub mod core;
pub mod display;
pub mod game;
pub mod logic;
pub mod player;

pub use crate::core::{Board, Cell, Difficulty, GameError, Player, Position};
pub use game::{Game, GameStatus};

use crate::core::{Board, Position};

/// Seam between the game loop and a source of moves (human or computer).
///
/// `choose_move` blocks until a decision is made and must not mutate the
/// caller's board; `None` means resignation for a human controller and "no
/// legal move, treat as a pass" for a computer one.
pub trait PlayerController {
    fn choose_move(&self, board: &Board, legal_moves: &[Position]) -> Option<Position>;
    fn name(&self) -> &str;
}

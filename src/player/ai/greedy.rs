use super::eval::{self, Score};
use crate::core::{Board, Player, Position};
use crate::logic;
use crate::player::PlayerController;

/// Easy opponent: one ply of lookahead, no search. Picks the move whose
/// resulting position evaluates best; on ties the first in row-major order
/// wins.
pub struct GreedyAI {
    player: Player,
    name: String,
}

impl GreedyAI {
    pub fn new(player: Player, name: &str) -> Self {
        Self {
            player,
            name: name.to_string(),
        }
    }
}

impl PlayerController for GreedyAI {
    fn choose_move(&self, board: &Board, legal_moves: &[Position]) -> Option<Position> {
        let mut best: Option<(Position, Score)> = None;
        for &pos in legal_moves {
            let child = logic::apply_move(board, self.player, pos);
            let score = eval::evaluate(&child, self.player);
            // Strict improvement only, so the first of equals wins.
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((pos, score));
            }
        }
        best.map(|(pos, _)| pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

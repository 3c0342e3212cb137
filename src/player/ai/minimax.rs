use super::eval::{self, Score};
use crate::core::{Board, Player, Position};
use crate::logic;
use crate::player::PlayerController;

/// Fixed-depth minimax with alpha-beta pruning. A search always runs to its
/// configured depth before returning; there is no timeout or cancellation.
pub struct MinimaxAI {
    player: Player,
    name: String,
    depth: u32,
}

impl MinimaxAI {
    pub fn new(player: Player, name: &str, depth: u32) -> Self {
        Self {
            player,
            name: name.to_string(),
            depth: depth.max(1),
        }
    }

    /// Value of `board` for `self.player` with `to_move` to act and `depth`
    /// plies of search remaining. A forced pass recurses at the same depth:
    /// passes are not real plies for horizon purposes.
    fn minimax(
        &self,
        board: &Board,
        to_move: Player,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        if depth == 0 {
            return eval::evaluate(board, self.player);
        }

        let moves = logic::legal_moves(board, to_move);
        if moves.is_empty() {
            if logic::legal_moves(board, to_move.opponent()).is_empty() {
                // Terminal; the evaluator returns the decided value.
                return eval::evaluate(board, self.player);
            }
            return self.minimax(board, to_move.opponent(), depth, alpha, beta);
        }

        if to_move == self.player {
            let mut value = Score::MIN;
            for &pos in &moves {
                let child = logic::apply_move(board, to_move, pos);
                value = value.max(self.minimax(&child, to_move.opponent(), depth - 1, alpha, beta));
                alpha = alpha.max(value);
                if beta <= alpha {
                    break;
                }
            }
            value
        } else {
            let mut value = Score::MAX;
            for &pos in &moves {
                let child = logic::apply_move(board, to_move, pos);
                value = value.min(self.minimax(&child, to_move.opponent(), depth - 1, alpha, beta));
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            value
        }
    }
}

impl PlayerController for MinimaxAI {
    fn choose_move(&self, board: &Board, legal_moves: &[Position]) -> Option<Position> {
        let mut best: Option<(Position, Score)> = None;
        for &pos in legal_moves {
            let child = logic::apply_move(board, self.player, pos);
            let value = self.minimax(
                &child,
                self.player.opponent(),
                self.depth - 1,
                Score::MIN,
                Score::MAX,
            );
            if best.map_or(true, |(_, v)| value > v) {
                best = Some((pos, value));
            }
        }
        best.map(|(pos, _)| pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Reference search without pruning; same semantics otherwise.
    fn plain_minimax(board: &Board, to_move: Player, max_player: Player, depth: u32) -> Score {
        if depth == 0 {
            return eval::evaluate(board, max_player);
        }
        let moves = logic::legal_moves(board, to_move);
        if moves.is_empty() {
            if logic::legal_moves(board, to_move.opponent()).is_empty() {
                return eval::evaluate(board, max_player);
            }
            return plain_minimax(board, to_move.opponent(), max_player, depth);
        }
        let children = moves.iter().map(|&pos| {
            let child = logic::apply_move(board, to_move, pos);
            plain_minimax(&child, to_move.opponent(), max_player, depth - 1)
        });
        if to_move == max_player {
            children.max().unwrap()
        } else {
            children.min().unwrap()
        }
    }

    /// Plays `plies` random legal moves from the opening, passing when a
    /// side is stuck.
    fn random_position(rng: &mut StdRng, plies: usize) -> Board {
        let mut board = Board::new();
        let mut player = Player::Black;
        for _ in 0..plies {
            let moves = logic::legal_moves(&board, player);
            if moves.is_empty() {
                player = player.opponent();
                if logic::legal_moves(&board, player).is_empty() {
                    break;
                }
                continue;
            }
            let pos = moves[rng.gen_range(0..moves.len())];
            board = logic::apply_move(&board, player, pos);
            player = player.opponent();
        }
        board
    }

    #[test]
    fn test_no_moves_means_no_choice() {
        let ai = MinimaxAI::new(Player::White, "Minimax", 3);
        assert_eq!(ai.choose_move(&Board::new(), &[]), None);
    }

    #[test]
    fn test_pruning_preserves_values_and_choice() {
        // Pruning may change which branches are visited, never the value.
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..6 {
            let plies = rng.gen_range(4..24);
            let board = random_position(&mut rng, plies);
            let moves = logic::legal_moves(&board, Player::Black);
            if moves.is_empty() {
                continue;
            }

            let ai = MinimaxAI::new(Player::Black, "Minimax", 3);
            let mut plain_best: Option<(Position, Score)> = None;
            for &pos in &moves {
                let child = logic::apply_move(&board, Player::Black, pos);
                let pruned = ai.minimax(&child, Player::White, 2, Score::MIN, Score::MAX);
                let plain = plain_minimax(&child, Player::White, Player::Black, 2);
                assert_eq!(pruned, plain, "value mismatch at {}", pos);
                if plain_best.map_or(true, |(_, v)| plain > v) {
                    plain_best = Some((pos, plain));
                }
            }
            assert_eq!(
                ai.choose_move(&board, &moves),
                plain_best.map(|(pos, _)| pos)
            );
        }
    }

    #[test]
    fn test_finishing_move_is_valued_as_terminal_win() {
        // Everything Black except a lone White piece at (0, 6) and an empty
        // square at (0, 7). Black's only move takes the square, flips the
        // last White piece and ends the game 64-0.
        let mut board = Board::new();
        for row in 0..crate::core::BOARD_SIZE {
            for col in 0..crate::core::BOARD_SIZE {
                if (row, col) != (0, 7) {
                    board.set(Player::Black, Position::new(row, col));
                }
            }
        }
        board.set(Player::White, Position::new(0, 6));

        let moves = logic::legal_moves(&board, Player::Black);
        assert_eq!(moves, vec![Position::new(0, 7)]);
        assert!(logic::legal_moves(&board, Player::White).is_empty());

        let ai = MinimaxAI::new(Player::Black, "Minimax", 4);
        assert_eq!(ai.choose_move(&board, &moves), Some(Position::new(0, 7)));
        let finished = logic::apply_move(&board, Player::Black, Position::new(0, 7));
        assert_eq!(
            ai.minimax(&finished, Player::White, 3, Score::MIN, Score::MAX),
            Score::Terminal(64)
        );
    }

    #[test]
    fn test_deeper_search_still_returns_legal_moves() {
        let mut rng = StdRng::seed_from_u64(11);
        let board = random_position(&mut rng, 10);
        for depth in [1, 2, 3] {
            let ai = MinimaxAI::new(Player::White, "Minimax", depth);
            let moves = logic::legal_moves(&board, Player::White);
            if let Some(pos) = ai.choose_move(&board, &moves) {
                assert!(moves.contains(&pos));
            } else {
                assert!(moves.is_empty());
            }
        }
    }
}

//! Reversi rules: bracketing, flip counting, legality and move application.
//!
//! All functions here are pure over `&Board`; `apply_move` returns a fresh
//! board rather than mutating in place, so search branches can fan out from
//! the same position without sharing state.

use crate::core::{Board, Cell, Player, Position, BOARD_SIZE};

/// The eight compass directions as (row, col) steps.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Walks from `pos` along `dir` over an unbroken run of opponent pieces and
/// returns the piece of `player`'s own color that closes the run. `None` if
/// the run is empty, hits an empty square, or falls off the board first.
pub fn bracket(board: &Board, player: Player, pos: Position, dir: (i32, i32)) -> Option<Position> {
    let mut cur = pos.offset(dir)?;
    let mut run = 0;
    loop {
        match board.get(cur) {
            Cell::Empty => return None,
            c if c == player.cell() => return (run > 0).then_some(cur),
            _ => {
                run += 1;
                cur = cur.offset(dir)?;
            }
        }
    }
}

/// Total number of opponent pieces a placement at `pos` would flip, summed
/// over all eight directions. Zero means the placement is not legal.
pub fn move_flip_count(board: &Board, player: Player, pos: Position) -> usize {
    let mut total = 0;
    for &dir in &DIRECTIONS {
        if let Some(end) = bracket(board, player, pos, dir) {
            let mut cur = pos.offset(dir);
            while let Some(p) = cur {
                if p == end {
                    break;
                }
                total += 1;
                cur = p.offset(dir);
            }
        }
    }
    total
}

/// A legal placement: in bounds, empty, and flipping at least one piece.
pub fn is_valid(board: &Board, player: Player, pos: Position) -> bool {
    pos.in_bounds() && board.get(pos) == Cell::Empty && move_flip_count(board, player, pos) > 0
}

/// Every legal move for `player`, in row-major order. Recomputed from the
/// full grid on each call; nothing is cached across turns.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Position> {
    let mut moves = Vec::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let pos = Position::new(row, col);
            if is_valid(board, player, pos) {
                moves.push(pos);
            }
        }
    }
    moves
}

/// Applies a move and returns the resulting board: the piece lands on `pos`
/// and every bracketed run is flipped to `player`'s color.
///
/// Assumes the caller has checked `is_valid`; an illegal coordinate just
/// places a piece and flips nothing.
pub fn apply_move(board: &Board, player: Player, pos: Position) -> Board {
    let mut next = *board;
    next.set(player, pos);
    for &dir in &DIRECTIONS {
        if let Some(end) = bracket(board, player, pos, dir) {
            let mut cur = pos.offset(dir);
            while let Some(p) = cur {
                if p == end {
                    break;
                }
                next.set(player, p);
                cur = p.offset(dir);
            }
        }
    }
    next
}

/// Neither side has a legal move. There is no separate terminal flag; this
/// is the definition.
pub fn is_terminal(board: &Board) -> bool {
    legal_moves(board, Player::Black).is_empty() && legal_moves(board, Player::White).is_empty()
}

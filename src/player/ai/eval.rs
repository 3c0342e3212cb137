//! # Evaluation Module
//!
//! Static evaluation of a position for a given player. The score is used as
//! the leaf heuristic of the minimax search and as the scorer for the
//! one-ply greedy opponent.
//!
//! ## Scoring Strategy
//! A non-terminal position is the sum of four components, each normalized to
//! roughly the same [-100, 100] scale before weighting:
//! 1. **Piece differential**: who holds more pieces, scaled by the ratio.
//! 2. **Corner occupancy**: corners are stable and worth a flat bonus.
//! 3. **Corner-adjacent penalty**: squares next to a corner tend to gift
//!    that corner to the opponent, so holding them scores negatively.
//! 4. **Mobility**: who has more legal moves, same ratio formula as 1.
//!
//! A terminal position (neither side can move) ignores all of that and
//! scores by the final piece differential, in a variant that always outranks
//! heuristic values of the same sign.

use super::config::AIConfig;
use crate::core::{Board, Cell, Player, Position};
use crate::logic;
use std::cmp::Ordering;

const CORNERS: [(usize, usize); 4] = [(0, 0), (0, 7), (7, 0), (7, 7)];

/// The twelve squares orthogonally or diagonally adjacent to a corner.
const CORNER_NEIGHBORS: [(usize, usize); 12] = [
    (0, 1),
    (1, 0),
    (1, 1),
    (0, 6),
    (1, 7),
    (1, 6),
    (6, 0),
    (7, 1),
    (6, 1),
    (6, 7),
    (7, 6),
    (6, 6),
];

/// A search value. `Terminal` carries the final piece differential of a
/// decided position; any winning terminal orders above every heuristic and
/// any losing terminal below, so decided lines dominate guesses without
/// resorting to floating-point infinities. The drawn terminal (differential
/// zero) compares against heuristics as the value 0.
#[derive(Debug, Clone, Copy)]
pub enum Score {
    Terminal(i32),
    Heuristic(f64),
}

impl Score {
    /// Below every reachable value; initializer for alpha.
    pub const MIN: Score = Score::Terminal(i32::MIN);
    /// Above every reachable value; initializer for beta.
    pub const MAX: Score = Score::Terminal(i32::MAX);
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Score::Terminal(a), Score::Terminal(b)) => a.cmp(b),
            (Score::Terminal(a), Score::Heuristic(h)) => match a.cmp(&0) {
                Ordering::Equal => 0.0_f64.total_cmp(h),
                ord => ord,
            },
            (Score::Heuristic(h), Score::Terminal(b)) => match b.cmp(&0) {
                Ordering::Equal => h.total_cmp(&0.0),
                Ordering::Greater => Ordering::Less,
                Ordering::Less => Ordering::Greater,
            },
            (Score::Heuristic(a), Score::Heuristic(b)) => a.total_cmp(b),
        }
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Score {}

/// Scores `board` from `player`'s perspective.
pub fn evaluate(board: &Board, player: Player) -> Score {
    let opponent = player.opponent();
    let my_moves = logic::legal_moves(board, player).len();
    let their_moves = logic::legal_moves(board, opponent).len();

    let mine = board.count(player) as i32;
    let theirs = board.count(opponent) as i32;

    if my_moves == 0 && their_moves == 0 {
        return Score::Terminal(mine - theirs);
    }

    let weights = &AIConfig::get().evaluation;

    let pieces = ratio_score(mine as f64, theirs as f64);

    let mut corner_diff = 0.0;
    for &(row, col) in &CORNERS {
        match board.get(Position::new(row, col)) {
            Cell::Empty => {}
            c if c == player.cell() => corner_diff += 1.0,
            _ => corner_diff -= 1.0,
        }
    }
    let corners = weights.corner_weight * corner_diff;

    let mut neighbor_diff = 0.0;
    for &(row, col) in &CORNER_NEIGHBORS {
        match board.get(Position::new(row, col)) {
            Cell::Empty => {}
            c if c == player.cell() => neighbor_diff += 1.0,
            _ => neighbor_diff -= 1.0,
        }
    }
    let corner_neighbors = -weights.corner_adjacent_penalty * neighbor_diff;

    let mobility = ratio_score(my_moves as f64, their_moves as f64);

    Score::Heuristic(pieces + corners + corner_neighbors + mobility)
}

/// `100 * x / (x + y)` for the leader, negated for the trailer, zero on a
/// tie. Both piece differential and mobility use this shape.
fn ratio_score(x: f64, y: f64) -> f64 {
    if x > y {
        100.0 * x / (x + y)
    } else if x < y {
        -100.0 * y / (x + y)
    } else {
        0.0
    }
}

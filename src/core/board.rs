use super::types::{Cell, Player, Position};

pub const BOARD_SIZE: usize = 8;

/// The 8x8 grid. A plain value: copying it yields an independent snapshot,
/// which is what the search relies on when it explores hypothetical lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Canonical opening position: (3,4) and (4,3) Black, (3,3) and (4,4)
    /// White, everything else empty.
    pub fn new() -> Self {
        let mut board = Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        };
        board.set(Player::Black, Position::new(3, 4));
        board.set(Player::Black, Position::new(4, 3));
        board.set(Player::White, Position::new(3, 3));
        board.set(Player::White, Position::new(4, 4));
        board
    }

    /// Occupancy at `pos`. Panics if `pos` is off the board; callers with
    /// unchecked input go through `Position::in_bounds` first.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// Unconditionally claims `pos` for `player`. No legality check here;
    /// rule-respecting placement lives in `logic::apply_move`.
    pub fn set(&mut self, player: Player, pos: Position) {
        self.cells[pos.row][pos.col] = player.cell();
    }

    /// Number of squares `player` occupies.
    pub fn count(&self, player: Player) -> usize {
        let cell = player.cell();
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == cell)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

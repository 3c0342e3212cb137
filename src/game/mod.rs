use crate::core::{Board, Difficulty, GameError, Player, Position};
use crate::logic;
use crate::player::ai::{self, config::AIConfig};

/// Where the match stands. `Passed` is observable so the caller can tell the
/// players a turn was skipped before consuming it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// The named player is to move and has at least one legal move.
    AwaitingMove(Player),
    /// The named player has no legal move; the pass has not been taken yet.
    Passed(Player),
    /// Neither player can move. Absorbing.
    Terminal,
}

/// A single match: the authoritative board plus the turn state machine.
/// Cheap to clone, so a caller that wants history can snapshot it per move.
#[derive(Debug, Clone)]
pub struct Game {
    pub board: Board,
    status: GameStatus,
    human: Option<Player>,
    difficulty: Option<Difficulty>,
    pub last_move: Option<Position>,
}

impl Game {
    /// `human` picks the single-player color (`None` for two local players);
    /// `difficulty` configures the computer side. Black always opens.
    pub fn new(human: Option<Player>, difficulty: Option<Difficulty>) -> Self {
        Game {
            board: Board::new(),
            status: GameStatus::AwaitingMove(Player::Black),
            human,
            difficulty,
            last_move: None,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_player(&self) -> Option<Player> {
        match self.status {
            GameStatus::AwaitingMove(p) | GameStatus::Passed(p) => Some(p),
            GameStatus::Terminal => None,
        }
    }

    /// The computer's color in single-player mode.
    pub fn computer(&self) -> Option<Player> {
        self.human.map(Player::opponent)
    }

    /// Legal moves for the player to move; empty while passed or terminal.
    pub fn legal_moves(&self) -> Vec<Position> {
        match self.status {
            GameStatus::AwaitingMove(p) => logic::legal_moves(&self.board, p),
            _ => Vec::new(),
        }
    }

    /// Checked entry point for externally supplied coordinates.
    pub fn apply_human_move(&mut self, pos: Position) -> Result<(), GameError> {
        let player = match self.status {
            GameStatus::AwaitingMove(p) => p,
            _ => return Err(GameError::NoLegalMove),
        };
        if !pos.in_bounds() {
            return Err(GameError::OutOfRange);
        }
        if !logic::is_valid(&self.board, player, pos) {
            return Err(GameError::InvalidMove);
        }
        self.place(player, pos);
        Ok(())
    }

    /// Lets the configured search pick a move for the side to move, applies
    /// it, and returns it. `NoLegalMove` means the side has to pass.
    pub fn request_ai_move(&mut self) -> Result<Position, GameError> {
        let player = match self.status {
            GameStatus::AwaitingMove(p) => p,
            _ => return Err(GameError::NoLegalMove),
        };
        let difficulty = self
            .difficulty
            .unwrap_or(AIConfig::get().default_difficulty);
        let controller = ai::for_difficulty(player, difficulty);
        let moves = logic::legal_moves(&self.board, player);
        let pos = controller
            .choose_move(&self.board, &moves)
            .ok_or(GameError::NoLegalMove)?;
        self.place(player, pos);
        Ok(pos)
    }

    /// Consumes a forced pass: the turn flips without a move, or the game
    /// ends if the other side is stuck too.
    pub fn consume_pass(&mut self) -> Result<Player, GameError> {
        match self.status {
            GameStatus::Passed(p) => {
                let opponent = p.opponent();
                self.status = if logic::legal_moves(&self.board, opponent).is_empty() {
                    GameStatus::Terminal
                } else {
                    GameStatus::AwaitingMove(opponent)
                };
                Ok(p)
            }
            _ => Err(GameError::NoLegalMove),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status == GameStatus::Terminal
    }

    /// Strictly greater piece count wins; `None` is a draw.
    pub fn winner(&self) -> Option<Player> {
        let black = self.board.count(Player::Black);
        let white = self.board.count(Player::White);
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Player::Black),
            std::cmp::Ordering::Less => Some(Player::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn score(&self, player: Player) -> usize {
        self.board.count(player)
    }

    fn place(&mut self, player: Player, pos: Position) {
        self.board = logic::apply_move(&self.board, player, pos);
        self.last_move = Some(pos);
        let next = player.opponent();
        self.status = if logic::legal_moves(&self.board, next).is_empty() {
            GameStatus::Passed(next)
        } else {
            GameStatus::AwaitingMove(next)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BOARD_SIZE;

    #[test]
    fn test_new_game_awaits_black() {
        let game = Game::new(Some(Player::White), Some(Difficulty::Easy));
        assert_eq!(game.status(), GameStatus::AwaitingMove(Player::Black));
        assert_eq!(game.current_player(), Some(Player::Black));
        assert_eq!(game.computer(), Some(Player::Black));
        assert!(!game.is_terminal());
    }

    #[test]
    fn test_rejects_bad_coordinates() {
        let mut game = Game::new(None, None);
        assert_eq!(
            game.apply_human_move(Position::new(9, 0)),
            Err(GameError::OutOfRange)
        );
        assert_eq!(
            game.apply_human_move(Position::new(3, 3)),
            Err(GameError::InvalidMove)
        );
        assert_eq!(
            game.apply_human_move(Position::new(0, 0)),
            Err(GameError::InvalidMove)
        );
        // The board is untouched after rejections.
        assert_eq!(game.board, Board::new());
    }

    #[test]
    fn test_accepted_move_flips_turn() {
        let mut game = Game::new(None, None);
        game.apply_human_move(Position::new(2, 3)).unwrap();
        assert_eq!(game.status(), GameStatus::AwaitingMove(Player::White));
        assert_eq!(game.last_move, Some(Position::new(2, 3)));
        assert_eq!(game.score(Player::Black), 4);
        assert_eq!(game.score(Player::White), 1);
    }

    #[test]
    fn test_pass_then_terminal() {
        // All Black except one empty square nobody can take: White passes,
        // then Black is found stuck as well and the game ends.
        let mut game = Game::new(None, None);
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if (row, col) != (0, 0) {
                    game.board.set(Player::Black, Position::new(row, col));
                }
            }
        }
        game.status = GameStatus::Passed(Player::White);
        assert_eq!(game.consume_pass(), Ok(Player::White));
        assert!(game.is_terminal());
        assert_eq!(game.winner(), Some(Player::Black));
        assert!(game.legal_moves().is_empty());
        // Terminal is absorbing.
        assert_eq!(
            game.apply_human_move(Position::new(0, 0)),
            Err(GameError::NoLegalMove)
        );
        assert_eq!(game.request_ai_move(), Err(GameError::NoLegalMove));
    }

    #[test]
    fn test_pass_flips_to_opponent_when_they_can_move() {
        // White stuck, Black not: a White run along the top row that Black
        // can still close.
        let mut game = Game::new(None, None);
        let mut board = Board::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if row > 0 {
                    board.set(Player::Black, Position::new(row, col));
                }
            }
        }
        board.set(Player::Black, Position::new(0, 0));
        board.set(Player::White, Position::new(0, 1));
        // (0, 2) stays empty; Black closes the run from there.
        game.board = board;
        assert!(logic::legal_moves(&game.board, Player::White).is_empty());
        assert!(logic::is_valid(&game.board, Player::Black, Position::new(0, 2)));
        game.status = GameStatus::Passed(Player::White);
        assert_eq!(game.consume_pass(), Ok(Player::White));
        assert_eq!(game.status(), GameStatus::AwaitingMove(Player::Black));
    }

    #[test]
    fn test_ai_move_is_applied() {
        let mut game = Game::new(Some(Player::White), Some(Difficulty::Easy));
        let pos = game.request_ai_move().unwrap();
        assert!(Board::new().get(pos) == crate::core::Cell::Empty);
        assert_eq!(game.last_move, Some(pos));
        assert_eq!(game.status(), GameStatus::AwaitingMove(Player::White));
        assert_eq!(game.score(Player::Black) + game.score(Player::White), 5);
    }

    #[test]
    fn test_winner_draw_is_none() {
        let mut game = Game::new(None, None);
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let player = if col < 4 { Player::Black } else { Player::White };
                game.board.set(player, Position::new(row, col));
            }
        }
        assert_eq!(game.winner(), None);
    }
}

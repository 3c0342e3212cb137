use crate::core::{Board, Player, Position, BOARD_SIZE};
use crate::display::{render_board, DisplayState};
use crate::player::PlayerController;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::time::Duration;

/// Human player driven by a cursor on the rendered board.
pub struct TuiController {
    player: Player,
    name: String,
}

impl TuiController {
    pub fn new(player: Player, name: &str) -> Self {
        Self {
            player,
            name: name.to_string(),
        }
    }
}

impl PlayerController for TuiController {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, board: &Board, legal_moves: &[Position]) -> Option<Position> {
        let mut state = DisplayState::default();
        state.status_msg = Some(format!("{}'s turn ({})", self.name, self.player));
        state.highlights = legal_moves.to_vec();
        if let Some(&first) = legal_moves.first() {
            state.cursor = first;
        }

        loop {
            render_board(board, &state);
            print!("[Arrows]: Move | [Enter]: Place | [h]: Toggle hints | [q]: Resign\r\n");

            if event::poll(Duration::from_millis(100)).unwrap_or(false) {
                if let Ok(Event::Key(KeyEvent { code, .. })) = event::read() {
                    match code {
                        KeyCode::Char('q') => return None,
                        KeyCode::Up if state.cursor.row > 0 => state.cursor.row -= 1,
                        KeyCode::Down if state.cursor.row < BOARD_SIZE - 1 => {
                            state.cursor.row += 1
                        }
                        KeyCode::Left if state.cursor.col > 0 => state.cursor.col -= 1,
                        KeyCode::Right if state.cursor.col < BOARD_SIZE - 1 => {
                            state.cursor.col += 1
                        }
                        KeyCode::Char('h') => {
                            if state.highlights.is_empty() {
                                state.highlights = legal_moves.to_vec();
                            } else {
                                state.highlights.clear();
                            }
                        }
                        KeyCode::Enter | KeyCode::Char(' ') => {
                            if legal_moves.contains(&state.cursor) {
                                return Some(state.cursor);
                            }
                            state.status_msg =
                                Some(format!("{} is not a legal move", state.cursor));
                        }
                        _ => {}
                    }
                }
            }
        }
    }
}

use crate::core::{Board, Cell, Player, Position, BOARD_SIZE};
use crossterm::{cursor, execute, style::Stylize, terminal};
use std::io::stdout;

pub struct DisplayState {
    pub cursor: Position,
    pub highlights: Vec<Position>,
    pub status_msg: Option<String>,
    pub last_move: Option<Position>,
    pub show_cursor: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            cursor: Position::new(3, 3),
            highlights: Vec::new(),
            status_msg: None,
            last_move: None,
            show_cursor: true,
        }
    }
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }
}

fn piece_char(cell: Cell) -> &'static str {
    match cell {
        Cell::Black => "●",
        Cell::White => "○",
        Cell::Empty => ".",
    }
}

pub fn render_board(board: &Board, state: &DisplayState) {
    let mut out = stdout();

    // Clear the whole screen to avoid scrolling in raw mode.
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )
    .unwrap();

    print!("=== Reversi ===\r\n");
    if let Some(msg) = &state.status_msg {
        print!("{}\r\n", msg.clone().bold().yellow());
    } else {
        print!("\r\n");
    }
    print!("\r\n");

    print!("    ");
    for col in 0..BOARD_SIZE {
        print!("  {} ", col);
    }
    print!("\r\n");
    print!("   +{}+\r\n", "----".repeat(BOARD_SIZE));

    for row in 0..BOARD_SIZE {
        print!("{:2} |", row);
        for col in 0..BOARD_SIZE {
            let pos = Position::new(row, col);
            let cell = board.get(pos);

            let is_cursor = state.show_cursor && state.cursor == pos;
            let is_highlight = state.highlights.contains(&pos);
            let is_last_move = state.last_move == Some(pos);

            let (prefix, suffix) = if is_cursor {
                ("[", "]")
            } else if is_highlight {
                ("(", ")")
            } else if is_last_move {
                ("{", "}")
            } else {
                (" ", " ")
            };

            let cell_text = format!("{} {}{}", prefix, piece_char(cell), suffix);

            if is_cursor {
                print!("{}", cell_text.yellow());
            } else if is_highlight {
                print!("{}", cell_text.green());
            } else if is_last_move {
                print!("{}", cell_text.red());
            } else {
                match cell {
                    Cell::Black => print!("{}", cell_text.cyan()),
                    Cell::White => print!("{}", cell_text.magenta()),
                    Cell::Empty => print!("{}", cell_text),
                }
            }
        }
        print!("|\r\n");
    }
    print!("   +{}+\r\n", "----".repeat(BOARD_SIZE));

    print!(
        "{}  {}\r\n\r\n",
        format!("● Black: {:2}", board.count(Player::Black)).cyan(),
        format!("○ White: {:2}", board.count(Player::White)).magenta()
    );
}

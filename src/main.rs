use crossterm::event::{self, Event, KeyCode};
use crossterm::{execute, terminal};
use reversi_engine::core::{Difficulty, Player};
use reversi_engine::display::{render_board, DisplayState};
use reversi_engine::game::{Game, GameStatus};
use reversi_engine::player::{PlayerController, TuiController};
use std::io;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    terminal::enable_raw_mode()?;
    execute!(io::stdout(), terminal::EnterAlternateScreen)?;

    let res = run();

    execute!(io::stdout(), terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    res
}

fn read_key() -> anyhow::Result<KeyCode> {
    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                return Ok(key.code);
            }
        }
    }
}

fn run() -> anyhow::Result<()> {
    print!("=== Reversi ===\r\n\r\n");
    print!("Select mode:\r\n");
    print!("1. Human vs Human\r\n");
    print!("2. Human vs Computer\r\n");
    print!("3. Computer vs Computer\r\n");
    print!("q. Quit\r\n");

    let mode = loop {
        match read_key()? {
            KeyCode::Char('1') => break 1,
            KeyCode::Char('2') => break 2,
            KeyCode::Char('3') => break 3,
            KeyCode::Char('q') => return Ok(()),
            _ => {}
        }
    };

    let difficulty = if mode >= 2 {
        print!("\r\nSelect difficulty:\r\n");
        print!("1. Easy (greedy)\r\n");
        print!("2. Medium (minimax, depth 3)\r\n");
        print!("3. Hard (minimax, depth 4)\r\n");
        Some(loop {
            match read_key()? {
                KeyCode::Char('1') => break Difficulty::Easy,
                KeyCode::Char('2') => break Difficulty::Medium,
                KeyCode::Char('3') => break Difficulty::Hard,
                KeyCode::Char('q') => return Ok(()),
                _ => {}
            }
        })
    } else {
        None
    };

    let human = if mode == 2 {
        print!("\r\nPlay as: [b] Black (moves first) / [w] White\r\n");
        Some(loop {
            match read_key()? {
                KeyCode::Char('b') => break Player::Black,
                KeyCode::Char('w') => break Player::White,
                KeyCode::Char('q') => return Ok(()),
                _ => {}
            }
        })
    } else {
        None
    };

    let mut game = Game::new(human, difficulty);

    let is_human = |player: Player| match mode {
        1 => true,
        2 => Some(player) == human,
        _ => false,
    };
    let tui_black =
        is_human(Player::Black).then(|| TuiController::new(Player::Black, "Black"));
    let tui_white =
        is_human(Player::White).then(|| TuiController::new(Player::White, "White"));

    loop {
        match game.status() {
            GameStatus::Terminal => break,
            GameStatus::Passed(player) => {
                let mut state = DisplayState::new();
                state.show_cursor = false;
                state.last_move = game.last_move;
                state.status_msg = Some(format!(
                    "{} has no legal move: pass (press any key)",
                    player
                ));
                render_board(&game.board, &state);
                read_key()?;
                game.consume_pass()?;
            }
            GameStatus::AwaitingMove(player) => {
                let tui = match player {
                    Player::Black => tui_black.as_ref(),
                    Player::White => tui_white.as_ref(),
                };
                if let Some(tui) = tui {
                    let moves = game.legal_moves();
                    match tui.choose_move(&game.board, &moves) {
                        Some(pos) => game.apply_human_move(pos)?,
                        None => {
                            print!("{} resigns. Press any key to exit.\r\n", player);
                            read_key()?;
                            return Ok(());
                        }
                    }
                } else {
                    let mut state = DisplayState::new();
                    state.show_cursor = false;
                    state.last_move = game.last_move;
                    state.status_msg = Some(format!("{} (computer) is thinking...", player));
                    render_board(&game.board, &state);

                    game.request_ai_move()?;

                    // Give the watcher a beat, and a chance to quit.
                    if event::poll(Duration::from_millis(300))? {
                        if let Event::Key(key) = event::read()? {
                            if key.code == KeyCode::Char('q') {
                                return Ok(());
                            }
                        }
                    }
                }
            }
        }
    }

    let black = game.score(Player::Black);
    let white = game.score(Player::White);
    let mut state = DisplayState::new();
    state.show_cursor = false;
    state.last_move = game.last_move;
    state.status_msg = Some(match game.winner() {
        Some(player) => {
            format!(
                "Game over: {} wins {} to {}",
                player,
                black.max(white),
                black.min(white)
            )
        }
        None => format!("Game over: draw, {} to {}", black, white),
    });
    render_board(&game.board, &state);
    print!("Press any key to exit.\r\n");
    read_key()?;

    Ok(())
}

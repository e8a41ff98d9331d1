use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{debug, info};

use crate::config::POLL_MS;
use crate::game::Game;
use crate::ui::draw_game;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// How the interactive session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Input {
    Move(i32, i32),
    Quit,
}

pub fn run(game: &mut Game) -> Result<Outcome> {
    let mut tui = TuiGuard::new()?;
    run_loop(tui.terminal_mut(), game)
}

fn run_loop(terminal: &mut Term, game: &mut Game) -> Result<Outcome> {
    info!(seed = game.seed, "session started");
    loop {
        terminal
            .draw(|frame| draw_game(frame, game))
            .context("failed to draw frame")?;

        if !event::poll(Duration::from_millis(POLL_MS))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match map_key(key.code) {
            Some(Input::Quit) => break,
            Some(Input::Move(dx, dy)) => {
                let moved = game.move_cursor(dx, dy);
                debug!(dx, dy, moved, cursor = ?game.cursor, "move");
            }
            None => {}
        }
    }

    let outcome = if game.won { Outcome::Won } else { Outcome::Quit };
    info!(?outcome, moves = game.moves, "session ended");
    Ok(outcome)
}

fn map_key(code: KeyCode) -> Option<Input> {
    match code {
        KeyCode::Up | KeyCode::Char('w') => Some(Input::Move(0, -1)),
        KeyCode::Down | KeyCode::Char('s') => Some(Input::Move(0, 1)),
        KeyCode::Left | KeyCode::Char('a') => Some(Input::Move(-1, 0)),
        KeyCode::Right | KeyCode::Char('d') => Some(Input::Move(1, 0)),
        KeyCode::Char('q') | KeyCode::Esc => Some(Input::Quit),
        _ => None,
    }
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_wasd_move() {
        assert_eq!(map_key(KeyCode::Up), Some(Input::Move(0, -1)));
        assert_eq!(map_key(KeyCode::Char('w')), Some(Input::Move(0, -1)));
        assert_eq!(map_key(KeyCode::Down), Some(Input::Move(0, 1)));
        assert_eq!(map_key(KeyCode::Char('a')), Some(Input::Move(-1, 0)));
        assert_eq!(map_key(KeyCode::Right), Some(Input::Move(1, 0)));
    }

    #[test]
    fn q_and_escape_quit() {
        assert_eq!(map_key(KeyCode::Char('q')), Some(Input::Quit));
        assert_eq!(map_key(KeyCode::Esc), Some(Input::Quit));
        assert_eq!(map_key(KeyCode::Char('x')), None);
        assert_eq!(map_key(KeyCode::Enter), None);
    }
}

//! Application state and key handling.

use crossterm::event::KeyCode;
use noughts::{GameSession, SessionView};
use tracing::debug;

/// Main application state.
pub struct App {
    session: GameSession,
}

impl App {
    /// Creates a new application around a session.
    pub fn new(session: GameSession) -> Self {
        Self { session }
    }

    /// Returns a snapshot for rendering.
    pub fn view(&self) -> SessionView {
        self.session.view()
    }

    /// Handles a key press. Returns `false` when the app should quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Char('r') => {
                debug!("Reset requested");
                self.session.reset();
            }
            KeyCode::Char('c') => {
                debug!("Mode toggle requested");
                self.session.toggle_mode();
            }
            KeyCode::Char('u') => {
                debug!("Undo requested");
                self.session.undo();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(digit) = c.to_digit(10) {
                    let pos = digit as usize;
                    if (1..=9).contains(&pos) {
                        debug!(cell = pos - 1, "Cell key pressed");
                        self.session.click(pos - 1);
                    }
                }
            }
            _ => {}
        }
        true
    }
}

//! Game session management.
//!
//! [`GameSession`] wraps the engine behind a lock shared with the
//! computer's delayed reply task, composes the status line shown to
//! players, and hands out render-ready snapshots.

use crate::game::{Game, MoveError, UndoError};
use crate::rng::GameRng;
use crate::taunt::TauntPool;
use crate::types::{Board, GameStatus, Mark, Mode, WinningLine};
use serde::Serialize;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// Delay before the computer answers in [`Mode::VsComputer`].
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(2000);

/// State behind the session lock.
#[derive(Debug)]
struct Inner {
    /// The turn engine.
    game: Game,
    /// RNG for computer moves and taunt picks.
    rng: GameRng,
    /// Taunt pool. Its memory survives resets.
    taunts: TauntPool,
    /// Status line, taunt included.
    message: String,
}

impl Inner {
    fn new(mode: Mode, rng: GameRng) -> Self {
        let game = Game::new(mode);
        let message = turn_message(game.to_move());
        Self {
            game,
            rng,
            taunts: TauntPool::new(),
            message,
        }
    }

    /// Applies a move and rebuilds the message line.
    fn apply_move(&mut self, cell: usize, mark: Mark) -> Result<(), MoveError> {
        self.game.make_move(cell, mark)?;
        self.refresh_after_move();
        Ok(())
    }

    /// Rebuilds the message line after a mark landed. A taunt is
    /// appended while the game is still running.
    fn refresh_after_move(&mut self) {
        let status = self.game.status().clone();
        self.message = match status {
            GameStatus::InProgress => {
                let mut message = turn_message(self.game.to_move());
                if let Some(taunt) = self.taunts.pick(&mut self.rng) {
                    message.push_str(" — ");
                    message.push_str(taunt);
                }
                message
            }
            GameStatus::Won(line) => format!("🎉 Player {} wins! 🎊 Great Job!", line.mark),
            GameStatus::Draw => "😐 It's a draw!".to_string(),
        };
    }

    fn view(&self) -> SessionView {
        SessionView {
            board: self.game.board().clone(),
            status: self.game.status().clone(),
            message: self.message.clone(),
            to_move: self.game.to_move(),
            mode: self.game.mode(),
            undo_available: self.game.undo_available(),
        }
    }
}

fn turn_message(mark: Mark) -> String {
    format!("Player {}'s turn", mark)
}

/// Render-ready snapshot of a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    /// The board.
    pub board: Board,
    /// Game status.
    pub status: GameStatus,
    /// Status line, taunt included.
    pub message: String,
    /// Mark to move next.
    pub to_move: Mark,
    /// Game mode.
    pub mode: Mode,
    /// Whether undo is still on the table.
    pub undo_available: bool,
}

impl SessionView {
    /// Returns the completed line when the game has been won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match &self.status {
            GameStatus::Won(line) => Some(*line),
            _ => None,
        }
    }

    /// Checks if the given cell is part of the winning line.
    pub fn is_winning_cell(&self, cell: usize) -> bool {
        self.winning_line().is_some_and(|line| line.contains(cell))
    }
}

/// Handle to a scheduled computer reply.
///
/// Cancelling aborts the underlying task; dropping the handle does the
/// same, so a replaced or discarded schedule cannot fire later.
#[derive(Debug)]
struct PendingMove {
    handle: JoinHandle<()>,
}

impl PendingMove {
    /// Cancels the scheduled reply.
    fn cancel(&self) {
        self.handle.abort();
    }

    /// Checks if the reply already fired or was cancelled.
    fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for PendingMove {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A live game session.
#[derive(Debug)]
pub struct GameSession {
    /// Engine state shared with the reply task.
    shared: Arc<Mutex<Inner>>,
    /// The scheduled computer reply, if any.
    pending: Option<PendingMove>,
    /// How long the computer "thinks" before replying.
    reply_delay: Duration,
}

impl GameSession {
    /// Creates a session with an entropy-seeded RNG.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        Self::with_rng(mode, GameRng::from_entropy())
    }

    /// Creates a session with the given RNG. Seeded sessions replay the
    /// same computer moves and taunts.
    pub fn with_rng(mode: Mode, rng: GameRng) -> Self {
        info!(mode = mode.name(), "Creating game session");
        Self {
            shared: Arc::new(Mutex::new(Inner::new(mode, rng))),
            pending: None,
            reply_delay: DEFAULT_REPLY_DELAY,
        }
    }

    /// Overrides the computer's reply delay.
    pub fn with_reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay = delay;
        self
    }

    /// Handles a human click on `cell`.
    ///
    /// Invalid clicks (occupied cell, finished game, out of bounds) are
    /// ignored, as is any click while the computer owns the turn. A
    /// successful X move in [`Mode::VsComputer`] that leaves the game
    /// running schedules the computer's reply.
    #[instrument(skip(self))]
    pub fn click(&mut self, cell: usize) {
        let schedule = {
            let mut guard = self.shared.lock().unwrap();
            let inner = &mut *guard;

            if inner.game.mode() == Mode::VsComputer && inner.game.to_move() == Mark::O {
                debug!(cell, "Ignoring click while the computer owns the turn");
                return;
            }

            let mark = inner.game.to_move();
            if let Err(error) = inner.apply_move(cell, mark) {
                debug!(cell, %error, "Ignoring click");
                return;
            }

            inner.game.mode() == Mode::VsComputer
                && inner.game.in_progress()
                && inner.game.to_move() == Mark::O
        };

        if schedule {
            self.schedule_computer_reply();
        }
    }

    /// Spawns the delayed reply task.
    ///
    /// The task re-validates mode and turn after the delay. Undo, reset
    /// and mode switches cancel the schedule; a task that slips past
    /// cancellation is still rejected by the turn check.
    fn schedule_computer_reply(&mut self) {
        let shared = Arc::clone(&self.shared);
        let delay = self.reply_delay;
        debug!(delay_ms = delay.as_millis() as u64, "Scheduling computer reply");

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut guard = shared.lock().unwrap();
            let inner = &mut *guard;

            if inner.game.mode() != Mode::VsComputer || inner.game.to_move() != Mark::O {
                debug!("Scheduled reply is stale, skipping");
                return;
            }

            let Some(cell) = inner.game.choose_computer_move(&mut inner.rng) else {
                return;
            };
            match inner.apply_move(cell, Mark::O) {
                Ok(()) => info!(cell, "Computer replied"),
                Err(error) => warn!(cell, %error, "Computer reply rejected"),
            }
        });

        self.pending = Some(PendingMove { handle });
    }

    /// Undoes back to before X's last move.
    ///
    /// A successful undo hands the turn to X and cancels any scheduled
    /// computer reply. Only the spent-undo case surfaces a notice; other
    /// failures leave the message untouched.
    #[instrument(skip(self))]
    pub fn undo(&mut self) {
        let undone = {
            let mut guard = self.shared.lock().unwrap();
            match guard.game.undo() {
                Ok(()) => {
                    guard.message = "Undo used! Player X's turn".to_string();
                    info!("Undo applied");
                    true
                }
                Err(UndoError::AlreadyUsed) => {
                    guard.message = "⚠️ Undo can only be used once per game!".to_string();
                    debug!("Undo already spent");
                    false
                }
                Err(error) => {
                    debug!(%error, "Undo unavailable");
                    false
                }
            }
        };

        if undone {
            self.cancel_pending();
        }
    }

    /// Starts a fresh game, keeping the mode.
    ///
    /// Cancels any scheduled computer reply. Taunt memory survives.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cancel_pending();

        let mut guard = self.shared.lock().unwrap();
        guard.game.reset();
        guard.message = turn_message(guard.game.to_move());
        info!("Game reset");
    }

    /// Switches the mode and starts a fresh game.
    ///
    /// Cancels any scheduled computer reply.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: Mode) {
        self.cancel_pending();

        let mut guard = self.shared.lock().unwrap();
        guard.game.set_mode(mode);
        guard.message = turn_message(guard.game.to_move());
        info!(mode = mode.name(), "Mode changed");
    }

    /// Flips between the two modes, starting a fresh game.
    pub fn toggle_mode(&mut self) {
        let mode = {
            let guard = self.shared.lock().unwrap();
            match guard.game.mode() {
                Mode::TwoPlayer => Mode::VsComputer,
                Mode::VsComputer => Mode::TwoPlayer,
            }
        };
        self.set_mode(mode);
    }

    /// Checks if a computer reply is scheduled and not yet delivered.
    pub fn pending_reply(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| !pending.is_finished())
    }

    /// Returns a snapshot for rendering.
    pub fn view(&self) -> SessionView {
        self.shared.lock().unwrap().view()
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
            debug!("Cancelled scheduled computer reply");
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

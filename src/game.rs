//! The turn engine.
//!
//! [`Game`] owns the board, the turn, the status, and the undo history.
//! It validates and applies moves; scheduling the computer's delayed
//! reply is the session's job (see [`crate::GameSession`]).

use crate::rng::GameRng;
use crate::rules;
use crate::types::{Board, GameStatus, Mark, Mode, Square, WinningLine};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index is outside the board.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The cell is already occupied.
    #[display("Cell {} is already occupied", _0)]
    Occupied(usize),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this mark's turn.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Mark),
}

impl std::error::Error for MoveError {}

/// Error that can occur when undoing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum UndoError {
    /// Undo is only offered against the computer.
    #[display("Undo is only available against the computer")]
    WrongMode,

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The one allowed undo was already spent.
    #[display("Undo can only be used once per game")]
    AlreadyUsed,

    /// There is no snapshot to restore.
    #[display("Nothing to undo")]
    NothingToUndo,
}

impl std::error::Error for UndoError {}

/// Tic-tac-toe turn engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Who plays O.
    mode: Mode,
    /// The board.
    board: Board,
    /// Mark to move next. Unchanged once the game ends.
    to_move: Mark,
    /// Game status.
    status: GameStatus,
    /// Board snapshots taken before eligible X moves.
    history: Vec<Board>,
    /// Whether the one allowed undo was spent.
    undo_used: bool,
}

impl Game {
    /// Creates a new game in the given mode. X moves first.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            board: Board::new(),
            to_move: Mark::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
            undo_used: false,
        }
    }

    /// Returns the game mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.winning_line().map(|line| line.mark)
    }

    /// Returns the completed line, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match &self.status {
            GameStatus::Won(line) => Some(*line),
            _ => None,
        }
    }

    /// Checks if the game is still running.
    pub fn in_progress(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    /// Checks if undo is still on the table.
    ///
    /// Undo exists in [`Mode::VsComputer`] only and is spent after one use.
    pub fn undo_available(&self) -> bool {
        self.mode == Mode::VsComputer && !self.undo_used
    }

    /// Makes a move for `mark` at `cell` (0-8).
    ///
    /// Validation order: game over, then bounds, then occupancy, then
    /// turn. In [`Mode::VsComputer`] a board snapshot is pushed before
    /// each of X's moves while the undo is unspent.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, cell: usize, mark: Mark) -> Result<(), MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        if cell >= 9 {
            return Err(MoveError::OutOfBounds(cell));
        }
        if !self.board.is_empty(cell) {
            return Err(MoveError::Occupied(cell));
        }
        if mark != self.to_move {
            return Err(MoveError::NotYourTurn(mark));
        }

        if self.mode == Mode::VsComputer && mark == Mark::X && !self.undo_used {
            self.history.push(self.board.clone());
        }

        self.board.set(cell, Square::Occupied(mark));
        debug!(cell, %mark, "Placed mark");

        if let Some(line) = rules::winning_line(&self.board) {
            self.status = GameStatus::Won(line);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.to_move = mark.opponent();
        }

        Ok(())
    }

    /// Picks a uniformly random empty cell for the computer.
    ///
    /// Returns `None` when the game is over or the board is full.
    #[instrument(skip(self, rng))]
    pub fn choose_computer_move(&self, rng: &mut GameRng) -> Option<usize> {
        if self.status != GameStatus::InProgress {
            return None;
        }
        rng.choose(&self.board.empty_cells()).copied()
    }

    /// Rewinds to the snapshot taken before X's last move.
    ///
    /// Restores the board, hands the turn back to X, and spends the one
    /// allowed undo.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<(), UndoError> {
        if self.mode != Mode::VsComputer {
            return Err(UndoError::WrongMode);
        }
        if self.status != GameStatus::InProgress {
            return Err(UndoError::GameOver);
        }
        if self.undo_used {
            return Err(UndoError::AlreadyUsed);
        }
        let snapshot = self.history.pop().ok_or(UndoError::NothingToUndo)?;

        self.board = snapshot;
        self.to_move = Mark::X;
        self.undo_used = true;
        debug!("Rewound to snapshot");

        Ok(())
    }

    /// Starts a fresh game, keeping the mode.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Game::new(self.mode);
    }

    /// Switches the mode and starts a fresh game.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: Mode) {
        *self = Game::new(mode);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Mode::TwoPlayer)
    }
}

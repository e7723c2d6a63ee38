//! Noughts library - tic-tac-toe with a scheduled computer opponent
//!
//! This library provides a validated turn engine and the session layer
//! around it: two-player hot-seat or human-vs-computer play, a
//! once-per-game undo, taunts on the status line, and a computer reply
//! that lands after a thinking delay and can be cancelled.
//!
//! # Architecture
//!
//! - **Types**: board, marks, game status, mode
//! - **Rules**: winning-line and draw detection
//! - **Game**: the turn engine (moves, undo, reset)
//! - **Session**: status-line composition and the scheduled computer reply
//! - **Taunts**: non-repeating flavor text
//!
//! # Example
//!
//! ```
//! use noughts::{Game, GameStatus, Mark, Mode};
//!
//! let mut game = Game::new(Mode::TwoPlayer);
//! game.make_move(4, Mark::X)?;
//! game.make_move(0, Mark::O)?;
//! assert_eq!(game.status(), &GameStatus::InProgress);
//! assert_eq!(game.to_move(), Mark::X);
//! # Ok::<(), noughts::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game;
mod rng;
mod rules;
mod session;
mod taunt;
mod types;

// Crate-level exports - Turn engine
pub use game::{Game, MoveError, UndoError};

// Crate-level exports - Randomness
pub use rng::GameRng;

// Crate-level exports - Rules
pub use rules::{LINES, check_winner, is_draw, winning_line};

// Crate-level exports - Session management
pub use session::{DEFAULT_REPLY_DELAY, GameSession, SessionView};

// Crate-level exports - Taunts
pub use taunt::{TAUNTS, TauntPool};

// Crate-level exports - Core types
pub use types::{Board, GameStatus, Mark, Mode, Square, WinningLine};

//! Core domain types for noughts.

use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Mark X (goes first).
    X,
    /// Mark O (goes second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// 3x3 board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from raw squares.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given cell (0-8).
    pub fn get(&self, cell: usize) -> Option<Square> {
        self.squares.get(cell).copied()
    }

    /// Sets the square at the given cell. Caller must have bounds-checked `cell`.
    pub(crate) fn set(&mut self, cell: usize, square: Square) {
        self.squares[cell] = square;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: usize) -> bool {
        matches!(self.get(cell), Some(Square::Empty))
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|&s| s != Square::Empty)
    }

    /// Returns the indices of all empty cells, in board order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|&(_, &square)| square == Square::Empty)
            .map(|(cell, _)| cell)
            .collect()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let cell = row * 3 + col;
                match self.squares[cell] {
                    Square::Empty => write!(f, "{}", cell + 1)?,
                    Square::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// A completed three-in-a-row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    /// The mark that completed the line.
    pub mark: Mark,
    /// The cells forming the line.
    pub cells: [usize; 3],
}

impl WinningLine {
    /// Checks if the given cell is part of the line.
    pub fn contains(&self, cell: usize) -> bool {
        self.cells.contains(&cell)
    }
}

/// Current status of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a completed line.
    Won(WinningLine),
    /// Game ended with a full board and no line.
    Draw,
}

/// Game mode - who plays O?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Two humans share the board.
    TwoPlayer,
    /// A human plays X against the computer's O.
    VsComputer,
}

impl Mode {
    /// Returns display name.
    pub fn name(&self) -> &str {
        match self {
            Mode::TwoPlayer => "Two Player",
            Mode::VsComputer => "Vs Computer",
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::TwoPlayer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cells_tracks_occupancy() {
        let mut board = Board::new();
        assert_eq!(board.empty_cells(), vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);

        board.set(0, Square::Occupied(Mark::X));
        board.set(4, Square::Occupied(Mark::O));
        board.set(8, Square::Occupied(Mark::X));
        assert_eq!(board.empty_cells(), vec![1, 2, 3, 5, 6, 7]);
        assert!(!board.is_full());
    }

    #[test]
    fn test_empty_cells_on_full_board() {
        let x = Square::Occupied(Mark::X);
        let o = Square::Occupied(Mark::O);
        let board = Board::from_squares([x, o, x, x, o, o, o, x, x]);
        assert!(board.empty_cells().is_empty());
        assert!(board.is_full());
    }
}

//! Win and draw detection.

use crate::types::{Board, Mark, Square, WinningLine};
use tracing::instrument;

/// Winning lines, scanned in this order: rows, then columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Finds the first completed line on the board.
///
/// Returns the line's mark and cells, or `None` if no line is complete.
/// When more than one line is complete, the first in scan order wins.
#[instrument]
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    for cells in LINES {
        let [a, b, c] = cells;
        if let Some(Square::Occupied(mark)) = board.get(a)
            && board.get(b) == Some(Square::Occupied(mark))
            && board.get(c) == Some(Square::Occupied(mark))
        {
            return Some(WinningLine { mark, cells });
        }
    }

    None
}

/// Checks if there is a winner on the board.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|line| line.mark)
}

/// Checks if the game is a draw.
///
/// A draw is a full board with no completed line.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winning_line(board).is_none()
}

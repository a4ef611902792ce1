//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell};
use super::win::winner;

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().flatten().all(|&cell| cell != Cell::Empty)
}

/// Checks if the game ended in a draw: full board, no completed line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}

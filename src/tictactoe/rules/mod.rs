//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions over [`Board`] values. None of
//! them mutate their input; [`result`] hands back a fresh board.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::winner;

use super::{Action, Board, Cell, InvalidMoveError, Outcome, Player};
use tracing::{instrument, trace};

/// Returns the starting board: all nine cells empty.
#[instrument]
pub fn initial() -> Board {
    Board::new()
}

/// Returns the player who has the next turn.
///
/// X moves whenever both players have placed the same number of marks,
/// O otherwise.
pub fn player(board: &Board) -> Player {
    if board.count(Player::X) == board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}

/// Returns every empty cell as an action, in row-major order.
pub fn actions(board: &Board) -> Vec<Action> {
    Action::all()
        .filter(|&action| board.get(action) == Some(Cell::Empty))
        .collect()
}

/// Returns the board that results from the player to move marking `action`.
///
/// # Errors
///
/// Returns [`InvalidMoveError::OutOfRange`] if the coordinate is off the
/// board and [`InvalidMoveError::Occupied`] if the cell already holds a mark.
#[instrument(level = "trace")]
pub fn result(board: &Board, action: Action) -> Result<Board, InvalidMoveError> {
    match board.get(action) {
        None => Err(InvalidMoveError::OutOfRange(action)),
        Some(Cell::Occupied(_)) => Err(InvalidMoveError::Occupied(action)),
        Some(Cell::Empty) => {
            let mover = player(board);
            trace!(player = %mover, "Placing mark");
            Ok(board.with_mark(action, mover))
        }
    }
}

/// Returns true if the game is over: someone won or the board is full.
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Returns the game value of a terminal board.
///
/// On a board that is not terminal this is [`Outcome::Draw`], the same as
/// a finished game with no completed line.
pub fn utility(board: &Board) -> Outcome {
    winner(board).map_or(Outcome::Draw, Outcome::win_for)
}

//! Moves on the board and the error raised for illegal ones.

use serde::{Deserialize, Serialize};

/// A move: the `(row, col)` coordinate of the cell to mark.
///
/// Any coordinates can be represented; whether an action is legal
/// depends on the board it is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Action {
    row: usize,
    col: usize,
}

impl Action {
    /// Creates a new action.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row index, top to bottom.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index, left to right.
    pub fn col(&self) -> usize {
        self.col
    }

    /// All nine on-board actions in row-major order.
    pub fn all() -> impl Iterator<Item = Action> {
        (0..super::SIZE).flat_map(|row| (0..super::SIZE).map(move |col| Action::new(row, col)))
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error raised when an action cannot be applied to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidMoveError {
    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(#[error(not(source))] Action),

    /// The coordinate lies off the board.
    #[display("Cell {} is off the board", _0)]
    OutOfRange(#[error(not(source))] Action),
}

impl InvalidMoveError {
    /// The action that was rejected.
    pub fn action(&self) -> Action {
        match self {
            InvalidMoveError::Occupied(action) | InvalidMoveError::OutOfRange(action) => *action,
        }
    }
}

//! Self-play: let the solver pick moves for both sides until the game ends.

use super::minimax::Solver;
use crate::tictactoe::{Action, Board, InvalidMoveError, Outcome, result, utility};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Record of a game played out by the solver.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayOut {
    /// Board the game started from.
    start: Board,
    /// Actions played, in order.
    history: Vec<Action>,
    /// Terminal board reached.
    board: Board,
    /// Final game value.
    outcome: Outcome,
}

impl PlayOut {
    /// Boards visited, from the start position to the terminal one.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvalidMoveError`] if the recorded history does
    /// not replay on the start board.
    pub fn boards(&self) -> Result<Vec<Board>, InvalidMoveError> {
        let mut boards = Vec::with_capacity(self.history.len() + 1);
        boards.push(self.start);
        let mut board = self.start;
        for &action in &self.history {
            board = result(&board, action)?;
            boards.push(board);
        }
        Ok(boards)
    }
}

/// Plays `start` out to a terminal board, with `solver` choosing every move.
///
/// # Errors
///
/// Propagates [`InvalidMoveError`] if the solver ever proposes an illegal
/// action.
#[instrument(skip(solver, start))]
pub fn play_out(solver: &mut Solver, start: Board) -> Result<PlayOut, InvalidMoveError> {
    let mut board = start;
    let mut history = Vec::new();

    while let Some(action) = solver.best_action(&board) {
        board = result(&board, action)?;
        debug!(ply = history.len(), %action, "Played move");
        history.push(action);
    }

    let outcome = utility(&board);
    info!(moves = history.len(), %outcome, "Game finished");
    Ok(PlayOut {
        start,
        history,
        board,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::terminal;

    #[test]
    fn test_play_out_from_won_position_finishes_at_once() {
        let start: Board = "XX./OO./...".parse().unwrap();
        let game = play_out(&mut Solver::default(), start).unwrap();
        assert_eq!(game.history(), &vec![Action::new(0, 2)]);
        assert_eq!(*game.outcome(), Outcome::XWins);
    }

    #[test]
    fn test_play_out_terminal_start_is_empty() {
        let start: Board = "OXO/XXO/XOX".parse().unwrap();
        let game = play_out(&mut Solver::default(), start).unwrap();
        assert!(game.history().is_empty());
        assert_eq!(game.board(), &start);
        assert_eq!(*game.outcome(), Outcome::Draw);
    }

    #[test]
    fn test_boards_replay_history() {
        let start: Board = "X../.O./...".parse().unwrap();
        let game = play_out(&mut Solver::default(), start).unwrap();
        let boards = game.boards().unwrap();
        assert_eq!(boards.len(), game.history().len() + 1);
        assert_eq!(boards.first(), Some(&start));
        assert_eq!(boards.last(), Some(game.board()));
        assert!(terminal(game.board()));
    }
}

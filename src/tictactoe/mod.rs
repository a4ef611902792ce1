//! Board model for tic-tac-toe.

mod action;
mod rules;
mod types;

pub use action::{Action, InvalidMoveError};
pub use rules::{actions, initial, is_draw, is_full, player, result, terminal, utility, winner};
pub use types::{Board, BoardParseError, Cell, Outcome, Player, SIZE};

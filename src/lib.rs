//! Strictly Minimax - exhaustive game-tree search for tic-tac-toe
//!
//! This library models the 3x3 board and solves it with plain minimax.
//!
//! # Architecture
//!
//! - **Board model**: immutable board snapshots, legal moves, win and draw rules
//! - **Search**: max/min value recursion over the full game tree
//! - **Solver**: tie-break policy among equally optimal moves, configurable from TOML
//! - **Self-play**: solver-versus-solver games from any position
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Action, Board, minimax};
//!
//! let board: Board = "XX./OO./...".parse().unwrap();
//! assert_eq!(minimax(&board), Some(Action::new(0, 2)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod search;
mod tictactoe;

// Crate-level exports - Board model
pub use tictactoe::{
    Action, Board, BoardParseError, Cell, InvalidMoveError, Outcome, Player, SIZE, actions,
    initial, is_draw, is_full, player, result, terminal, utility, winner,
};

// Crate-level exports - Search
pub use search::{
    Analysis, ConfigError, PlayOut, Role, Solver, SolverConfig, TieBreak, game_value, max_value,
    min_value, minimax, optimal_actions, play_out,
};

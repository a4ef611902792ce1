//! Adversarial search for tic-tac-toe.

mod config;
mod minimax;
mod play;

pub use config::{ConfigError, SolverConfig, TieBreak};
pub use minimax::{
    Analysis, Role, Solver, game_value, max_value, min_value, minimax, optimal_actions,
};
pub use play::{PlayOut, play_out};

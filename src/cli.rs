//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_minimax::{Board, TieBreak};

/// Strictly Minimax - perfect-play tic-tac-toe solver
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Exhaustive minimax solver for tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML solver config
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the tie-break policy (row_major or random)
    #[arg(long, global = true)]
    pub tie_break: Option<TieBreak>,

    /// Override the random tie-break seed
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move and game value for a board
    BestMove {
        /// Board as nine cells in row-major order, e.g. "XX./OO./..."
        board: Board,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play a position out with the solver moving for both sides
    Play {
        /// Starting board (defaults to the empty board)
        #[arg(long)]
        board: Option<Board>,

        /// Print the game record as JSON
        #[arg(long)]
        json: bool,
    },
}

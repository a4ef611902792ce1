//! Strictly Minimax - CLI
//!
//! Non-interactive driver for the solver: reports optimal moves and
//! plays positions out.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use serde::Serialize;
use strictly_minimax::{Action, Board, Outcome, Player, Solver, SolverConfig, play_out, player};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

/// Report printed by `best-move`.
#[derive(Debug, Serialize)]
struct BestMoveReport {
    board: Board,
    to_move: Player,
    best: Option<Action>,
    optimal: Vec<Action>,
    value: Outcome,
    winner: Option<Player>,
}

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut solver = Solver::new(load_config(&cli)?);

    match cli.command {
        Command::BestMove { board, json } => run_best_move(&mut solver, board, json),
        Command::Play { board, json } => run_play(&mut solver, board.unwrap_or_default(), json),
    }
}

/// Builds the solver config from the optional file and command-line overrides.
#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<SolverConfig> {
    let mut config = match &cli.config {
        Some(path) => SolverConfig::from_file(path)
            .with_context(|| format!("Loading {}", path.display()))?,
        None => SolverConfig::default(),
    };
    if let Some(tie_break) = cli.tie_break {
        config = config.with_tie_break(tie_break);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    info!(tie_break = %config.tie_break(), seed = ?config.seed(), "Solver configured");
    Ok(config)
}

/// Prints the optimal move for `board`.
#[instrument(skip(solver, board))]
fn run_best_move(solver: &mut Solver, board: Board, json: bool) -> Result<()> {
    let analysis = solver.analyze(&board);
    let report = BestMoveReport {
        board,
        to_move: player(&board),
        best: solver.choose(analysis.optimal()),
        optimal: analysis.optimal().clone(),
        value: *analysis.value(),
        winner: analysis.value().winner(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}\n", report.board);
    match report.best {
        Some(action) => {
            println!("{} to move, best action {}", report.to_move, action);
            let ties: Vec<_> = report.optimal.iter().map(ToString::to_string).collect();
            println!("Optimal actions: {}", ties.join(" "));
        }
        None => println!("Game is over"),
    }
    println!("Value: {}", report.value);
    match report.winner {
        Some(winner) => println!("{} wins with perfect play", winner),
        None => println!("Perfect play draws"),
    }
    Ok(())
}

/// Prints a self-play game starting from `board`.
#[instrument(skip(solver, board))]
fn run_play(solver: &mut Solver, board: Board, json: bool) -> Result<()> {
    let game = play_out(solver, board)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&game)?);
        return Ok(());
    }

    let boards = game.boards()?;
    for (ply, (board, action)) in boards.iter().skip(1).zip(game.history()).enumerate() {
        println!("{}. {} plays {}\n{}\n", ply + 1, player(&boards[ply]), action, board);
    }
    println!("Result: {}", game.outcome());
    Ok(())
}

//! Exhaustive minimax search over the tic-tac-toe game tree.
//!
//! X maximizes the [`Outcome`] and O minimizes it. The value of a board is
//! computed by a depth-first walk down to every terminal position below
//! it, with no memoization or pruning; the whole tree from the empty
//! board has fewer than 550,000 nodes.

use super::config::{SolverConfig, TieBreak};
use crate::tictactoe::{Action, Board, Outcome, Player, actions, player, terminal, utility};
use derive_getters::Getters;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use serde::Serialize;
use tracing::{debug, instrument};

/// Side a value computation is optimizing for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Picks the largest outcome (X).
    Max,
    /// Picks the smallest outcome (O).
    Min,
}

impl Role {
    /// The role played by `player`.
    pub fn of(player: Player) -> Self {
        match player {
            Player::X => Role::Max,
            Player::O => Role::Min,
        }
    }

    /// The opposing role.
    pub fn flip(self) -> Self {
        match self {
            Role::Max => Role::Min,
            Role::Min => Role::Max,
        }
    }

    /// Worst possible outcome for this role; the starting point of a fold.
    fn worst(self) -> Outcome {
        match self {
            Role::Max => Outcome::OWins,
            Role::Min => Outcome::XWins,
        }
    }

    /// The better of two outcomes for this role.
    fn better(self, a: Outcome, b: Outcome) -> Outcome {
        match self {
            Role::Max => a.max(b),
            Role::Min => a.min(b),
        }
    }
}

/// Counters gathered during one search.
#[derive(Debug, Default, Clone, Copy)]
struct SearchStats {
    nodes: u64,
    terminals: u64,
}

/// Legal moves paired with the boards they produce.
fn successors(board: &Board) -> impl Iterator<Item = (Action, Board)> + '_ {
    let mover = player(board);
    actions(board)
        .into_iter()
        .map(move |action| (action, board.with_mark(action, mover)))
}

/// Game value of `board` when `role` is to move and both sides play perfectly.
fn value(board: &Board, role: Role, stats: &mut SearchStats) -> Outcome {
    stats.nodes += 1;
    if terminal(board) {
        stats.terminals += 1;
        return utility(board);
    }

    let mut best = role.worst();
    for (_, child) in successors(board) {
        best = role.better(best, value(&child, role.flip(), stats));
    }
    best
}

/// Scores every legal action from `board` for the player to move.
fn score_actions(board: &Board) -> (Role, Vec<(Action, Outcome)>) {
    let role = Role::of(player(board));
    let mut stats = SearchStats::default();
    let scored: Vec<_> = successors(board)
        .map(|(action, child)| (action, value(&child, role.flip(), &mut stats)))
        .collect();
    debug!(
        nodes = stats.nodes,
        terminals = stats.terminals,
        candidates = scored.len(),
        "Search complete"
    );
    (role, scored)
}

/// Value of `board` for the maximizing side (X to move).
#[instrument(level = "trace")]
pub fn max_value(board: &Board) -> Outcome {
    value(board, Role::Max, &mut SearchStats::default())
}

/// Value of `board` for the minimizing side (O to move).
#[instrument(level = "trace")]
pub fn min_value(board: &Board) -> Outcome {
    value(board, Role::Min, &mut SearchStats::default())
}

/// Result of searching one board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Analysis {
    /// Game value under perfect play from both sides.
    value: Outcome,
    /// Every action achieving `value`, in row-major order. Empty on terminal boards.
    optimal: Vec<Action>,
}

/// Minimax solver with a configurable tie-break policy.
#[derive(Debug, Clone)]
pub struct Solver {
    config: SolverConfig,
    /// Present only under [`TieBreak::Random`].
    rng: Option<SmallRng>,
}

impl Solver {
    /// Creates a solver from `config`.
    ///
    /// Under [`TieBreak::Random`] the generator is seeded from the config,
    /// or from entropy when no seed is given.
    #[instrument]
    pub fn new(config: SolverConfig) -> Self {
        let rng = match (config.tie_break(), config.seed()) {
            (TieBreak::RowMajor, _) => None,
            (TieBreak::Random, Some(seed)) => Some(SmallRng::seed_from_u64(*seed)),
            (TieBreak::Random, None) => Some(SmallRng::from_entropy()),
        };
        Self { config, rng }
    }

    /// Returns the solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Game value of `board` under perfect play from both sides.
    ///
    /// Equal to [`utility`] on terminal boards.
    #[instrument(skip(self, board), fields(mover = %player(board)))]
    pub fn evaluate(&self, board: &Board) -> Outcome {
        let mut stats = SearchStats::default();
        let outcome = value(board, Role::of(player(board)), &mut stats);
        debug!(nodes = stats.nodes, %outcome, "Evaluated board");
        outcome
    }

    /// Game value and every optimal action, from a single search.
    #[instrument(skip(self, board), fields(mover = %player(board)))]
    pub fn analyze(&self, board: &Board) -> Analysis {
        if terminal(board) {
            debug!("Board is terminal, no actions");
            return Analysis {
                value: utility(board),
                optimal: Vec::new(),
            };
        }

        let (role, scored) = score_actions(board);
        let value = scored
            .iter()
            .fold(role.worst(), |acc, &(_, outcome)| role.better(acc, outcome));
        let optimal = scored
            .into_iter()
            .filter(|&(_, outcome)| outcome == value)
            .map(|(action, _)| action)
            .collect();
        Analysis { value, optimal }
    }

    /// Every action that achieves the optimal value, in row-major order.
    ///
    /// Empty when the board is terminal.
    pub fn optimal_actions(&self, board: &Board) -> Vec<Action> {
        self.analyze(board).optimal
    }

    /// Picks one of `candidates` by the configured [`TieBreak`].
    pub fn choose(&mut self, candidates: &[Action]) -> Option<Action> {
        match self.rng.as_mut() {
            Some(rng) => candidates.choose(rng).copied(),
            None => candidates.first().copied(),
        }
    }

    /// An optimal action for the player to move, or `None` if the game is over.
    ///
    /// Ties are resolved by the configured [`TieBreak`].
    #[instrument(
        skip(self, board),
        fields(mover = %player(board), tie_break = %self.config.tie_break())
    )]
    pub fn best_action(&mut self, board: &Board) -> Option<Action> {
        let analysis = self.analyze(board);
        let chosen = self.choose(&analysis.optimal);
        debug!(ties = analysis.optimal.len(), action = ?chosen, "Selected action");
        chosen
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

/// Returns an optimal action for the player to move, or `None` on a
/// terminal board.
///
/// Ties go to the first optimal action in row-major order.
#[instrument(skip(board))]
pub fn minimax(board: &Board) -> Option<Action> {
    Solver::default().best_action(board)
}

/// Every optimal action for the player to move, in row-major order.
#[instrument(skip(board))]
pub fn optimal_actions(board: &Board) -> Vec<Action> {
    Solver::default().optimal_actions(board)
}

/// Game value of `board` under perfect play.
#[instrument(skip(board))]
pub fn game_value(board: &Board) -> Outcome {
    Solver::default().evaluate(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{initial, result};

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_role_flip() {
        assert_eq!(Role::of(Player::X), Role::Max);
        assert_eq!(Role::of(Player::O).flip(), Role::Max);
    }

    #[test]
    fn test_takes_immediate_win() {
        assert_eq!(minimax(&board("XX./OO./...")), Some(Action::new(0, 2)));
    }

    #[test]
    fn test_o_takes_immediate_win() {
        // O to move: completing the middle row wins at once.
        let b = board("XX./OO./X..");
        assert_eq!(minimax(&b), Some(Action::new(1, 2)));
        assert_eq!(game_value(&b), Outcome::OWins);
    }

    #[test]
    fn test_blocks_forced_loss() {
        // O to move must block X's top row.
        let b = board("XX./.O./...");
        assert_eq!(optimal_actions(&b), vec![Action::new(0, 2)]);
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        assert_eq!(minimax(&board("XXX/OO./...")), None);
        assert!(optimal_actions(&board("OXO/XXO/XOX")).is_empty());
    }

    #[test]
    fn test_max_and_min_value_at_terminal() {
        let won = board("XXX/OO./...");
        assert_eq!(max_value(&won), Outcome::XWins);
        assert_eq!(min_value(&won), Outcome::XWins);
    }

    #[test]
    fn test_max_value_in_play() {
        assert_eq!(max_value(&board("XX./OO./...")), Outcome::XWins);
        assert_eq!(max_value(&initial()), Outcome::Draw);
    }

    #[test]
    fn test_min_value_in_play() {
        assert_eq!(min_value(&board("XX./OO./X..")), Outcome::OWins);
        // O blocks at (0, 2), then every reply is forced down to a draw.
        assert_eq!(min_value(&board("XX./.O./...")), Outcome::Draw);
    }

    #[test]
    fn test_analyze_matches_evaluate() {
        let solver = Solver::default();
        for text in ["X../.O./...", "XX./OO./X..", "XOX/XOO/OX.", "OXO/XXO/XOX"] {
            let b = board(text);
            let analysis = solver.analyze(&b);
            assert_eq!(*analysis.value(), solver.evaluate(&b), "{text}");
            assert_eq!(analysis.optimal(), &solver.optimal_actions(&b), "{text}");
        }
    }

    #[test]
    fn test_row_major_solver_has_no_rng() {
        assert!(Solver::default().rng.is_none());
        let random = Solver::new(SolverConfig::new(TieBreak::Random).with_seed(3));
        assert!(random.rng.is_some());
    }

    #[test]
    fn test_choose_row_major_takes_first() {
        let mut solver = Solver::default();
        let candidates = [Action::new(1, 2), Action::new(0, 0)];
        assert_eq!(solver.choose(&candidates), Some(Action::new(1, 2)));
        assert_eq!(solver.choose(&[]), None);
    }

    #[test]
    fn test_one_move_left() {
        // X to move with one empty cell, filling it draws.
        let b = board("XOX/XOO/OX.");
        assert_eq!(minimax(&b), Some(Action::new(2, 2)));
        let last = result(&b, Action::new(2, 2)).unwrap();
        assert_eq!(utility(&last), Outcome::Draw);
    }

    #[test]
    fn test_empty_board_value_is_draw() {
        assert_eq!(game_value(&initial()), Outcome::Draw);
    }

    #[test]
    fn test_evaluate_matches_best_child() {
        let b = board("X../.O./...");
        let solver = Solver::default();
        let value = solver.evaluate(&b);
        for action in solver.optimal_actions(&b) {
            let child = result(&b, action).unwrap();
            assert_eq!(solver.evaluate(&child), value);
        }
    }

    #[test]
    fn test_random_tie_break_is_seeded() {
        let config = SolverConfig::new(TieBreak::Random).with_seed(11);
        let b = board("X../.O./...");
        let picks_a: Vec<_> = {
            let mut solver = Solver::new(config.clone());
            (0..5).map(|_| solver.best_action(&b)).collect()
        };
        let picks_b: Vec<_> = {
            let mut solver = Solver::new(config);
            (0..5).map(|_| solver.best_action(&b)).collect()
        };
        assert_eq!(picks_a, picks_b);

        let optimal = optimal_actions(&b);
        assert!(picks_a.iter().flatten().all(|a| optimal.contains(a)));
    }
}

//! Core domain types for tic-tac-toe.

use super::action::Action;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Side length of the board.
pub const SIZE: usize = 3;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Character used for this player's mark in the text format.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Character used for this cell in the text format.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(player) => player.symbol(),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are small `Copy` values. Every move produces a fresh board
/// and leaves the one it was derived from untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed as `[row][col]`.
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Builds a board from explicit rows.
    pub fn from_rows(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Gets the cell targeted by `action`, or `None` if it lies off the board.
    pub fn get(&self, action: Action) -> Option<Cell> {
        self.cells
            .get(action.row())
            .and_then(|row| row.get(action.col()))
            .copied()
    }

    /// Checks if the cell targeted by `action` is on the board and empty.
    pub fn is_empty(&self, action: Action) -> bool {
        matches!(self.get(action), Some(Cell::Empty))
    }

    /// Returns all cells as rows.
    pub fn cells(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Counts the marks `player` has placed.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Occupied(player))
            .count()
    }

    /// Counts the occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Returns a copy of this board with `player`'s mark at `action`.
    ///
    /// Callers guarantee `action` is on the board.
    pub(crate) fn with_mark(mut self, action: Action, player: Player) -> Self {
        self.cells[action.row()][action.col()] = Cell::Occupied(player);
        self
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                write!(f, "{}", cell.symbol())?;
                if c < SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            if r < SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error returned when a board cannot be parsed from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// The text held the wrong number of cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(#[error(not(source))] usize),

    /// A character is neither a mark, an empty marker nor a separator.
    #[display("Unexpected character {:?} in board", _0)]
    UnexpectedChar(#[error(not(source))] char),
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order.
    ///
    /// `X` and `O` (either case) are marks, `.`, `-` and `_` are empty
    /// cells. Whitespace, `/` and `|` separate rows and are skipped.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parsed = Vec::with_capacity(SIZE * SIZE);
        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Cell::Occupied(Player::X),
                'O' | 'o' => Cell::Occupied(Player::O),
                '.' | '-' | '_' => Cell::Empty,
                '/' | '|' => continue,
                c if c.is_whitespace() => continue,
                other => return Err(BoardParseError::UnexpectedChar(other)),
            };
            parsed.push(cell);
        }

        if parsed.len() != SIZE * SIZE {
            return Err(BoardParseError::WrongCellCount(parsed.len()));
        }

        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        for (idx, cell) in parsed.into_iter().enumerate() {
            cells[idx / SIZE][idx % SIZE] = cell;
        }
        Ok(Self { cells })
    }
}

/// Signed game value of a board, from X's point of view.
///
/// Variants are ordered by value, so the maximum of a set of outcomes is
/// the best one for X and the minimum is the best one for O.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
pub enum Outcome {
    /// O has three in a row.
    #[display("O wins")]
    OWins,
    /// No completed line.
    #[display("Draw")]
    Draw,
    /// X has three in a row.
    #[display("X wins")]
    XWins,
}

impl Outcome {
    /// Outcome in which `player` has won.
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::X => Outcome::XWins,
            Player::O => Outcome::OWins,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::XWins => Some(Player::X),
            Outcome::OWins => Some(Player::O),
            Outcome::Draw => None,
        }
    }

    /// Numeric utility: 1, 0 or -1.
    pub fn value(self) -> i8 {
        match self {
            Outcome::OWins => -1,
            Outcome::Draw => 0,
            Outcome::XWins => 1,
        }
    }
}

impl From<Outcome> for i8 {
    fn from(outcome: Outcome) -> Self {
        outcome.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_and_display() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(board.get(Action::new(0, 0)), Some(Cell::Occupied(Player::X)));
        assert_eq!(board.get(Action::new(0, 1)), Some(Cell::Occupied(Player::O)));
        assert_eq!(board.get(Action::new(1, 1)), Some(Cell::Occupied(Player::X)));
        assert_eq!(board.get(Action::new(2, 2)), Some(Cell::Occupied(Player::O)));
        assert_eq!(board.to_string(), "X|O|.\n-+-+-\n.|X|.\n-+-+-\n.|.|O");
    }

    #[test]
    fn test_parse_accepts_display_output() {
        let board: Board = "x o _ | - x - | o . .".parse().unwrap();
        let reparsed: Board = board.to_string().replace("-+-+-", "").parse().unwrap();
        assert_eq!(board, reparsed);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(
            "XO.".parse::<Board>(),
            Err(BoardParseError::WrongCellCount(3))
        );
    }

    #[test]
    fn test_parse_rejects_unknown_char() {
        assert_eq!(
            "XO.Z.....".parse::<Board>(),
            Err(BoardParseError::UnexpectedChar('Z'))
        );
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::new();
        assert_eq!(board.get(Action::new(3, 0)), None);
        assert!(!board.is_empty(Action::new(0, 7)));
    }

    #[test]
    fn test_counts() {
        let board: Board = "XOX/O../...".parse().unwrap();
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 2);
        assert_eq!(board.occupied(), 4);
    }

    #[test]
    fn test_count_per_player_sums_to_occupied() {
        let board: Board = "XOX/OX./O..".parse().unwrap();
        let total: usize = Player::iter().map(|p| board.count(p)).sum();
        assert_eq!(total, board.occupied());
        for player in Player::iter() {
            assert_eq!(board.count(player) + board.count(player.opponent()), 6);
        }
    }

    #[test]
    fn test_outcome_winner() {
        for player in Player::iter() {
            assert_eq!(Outcome::win_for(player).winner(), Some(player));
        }
        assert_eq!(Outcome::Draw.winner(), None);
    }

    #[test]
    fn test_outcome_ordering_matches_value() {
        assert!(Outcome::OWins < Outcome::Draw);
        assert!(Outcome::Draw < Outcome::XWins);
        assert_eq!(i8::from(Outcome::XWins), 1);
        assert_eq!(i8::from(Outcome::OWins), -1);
        assert_eq!(Outcome::Draw.value(), 0);
    }
}

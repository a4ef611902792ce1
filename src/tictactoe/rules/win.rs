//! Win detection logic for tic-tac-toe.

use super::super::{Action, Board, Cell, Player};

/// The eight lines that win the game, as `(row, col)` triples.
const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line (rows, then columns, then
/// diagonals) holding three of `player`'s marks, `None` otherwise.
pub fn winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let cell = board.get(Action::from(a));
        match cell {
            Some(Cell::Occupied(player))
                if cell == board.get(Action::from(b)) && cell == board.get(Action::from(c)) =>
            {
                Some(player)
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(winner(&board("XXX/OO./...")), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        assert_eq!(winner(&board("XO./XO./.O.")), Some(Player::O));
    }

    #[test]
    fn test_winner_main_diagonal() {
        assert_eq!(winner(&board("OX./XO./..O")), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        assert_eq!(winner(&board("OOX/.X./XO.")), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(winner(&board("XX./OO./...")), None);
    }

    #[test]
    fn test_no_winner_mixed_line() {
        assert_eq!(winner(&board("XOX/OXO/OXO")), None);
    }
}

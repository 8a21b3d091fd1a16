//! Line enumeration and win/draw evaluation.
//!
//! Lines are checked in a fixed order: for each index `i`, row `i` then
//! column `i`; then the main diagonal; then the anti-diagonal. The first
//! complete line decides the winner. Under legal single-cell moves only
//! one line can complete per move, so the order only matters for boards
//! built by other means.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::core::board::{Board, Cell};
use crate::core::player::Player;
use crate::rules::outcome::Outcome;

/// A row, column, or diagonal spanning the whole board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    Row(usize),
    Column(usize),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// Coordinates `(row, column)` covered by this line on a `size` board.
    pub fn cells(self, size: usize) -> impl Iterator<Item = (usize, usize)> {
        (0..size).map(move |k| match self {
            Line::Row(r) => (r, k),
            Line::Column(c) => (k, c),
            Line::Diagonal => (k, k),
            Line::AntiDiagonal => (k, size - 1 - k),
        })
    }

    /// The player owning every cell of this line, if any.
    #[must_use]
    pub fn owner(self, board: &Board) -> Option<Player> {
        let size = board.size();
        let mut marks = self
            .cells(size)
            .map(|(r, c)| board.get(r, c).ok().and_then(Cell::player));

        let first = marks.next()??;
        marks.all(|m| m == Some(first)).then_some(first)
    }
}

/// All lines of a `size` board in evaluation order.
///
/// ```
/// use grid_tictactoe::rules::{lines, Line};
///
/// let order: Vec<_> = lines(2).collect();
/// assert_eq!(order, vec![
///     Line::Row(0), Line::Column(0),
///     Line::Row(1), Line::Column(1),
///     Line::Diagonal, Line::AntiDiagonal,
/// ]);
/// ```
pub fn lines(size: usize) -> impl Iterator<Item = Line> {
    (0..size)
        .flat_map(|i| [Line::Row(i), Line::Column(i)])
        .chain([Line::Diagonal, Line::AntiDiagonal])
}

/// The first complete line and its owner.
#[must_use]
pub fn winning_line(board: &Board) -> Option<(Line, Player)> {
    lines(board.size()).find_map(|line| line.owner(board).map(|player| (line, player)))
}

/// Evaluate the board: a win takes priority over a full board.
#[instrument(level = "trace", skip(board), fields(size = board.size()))]
#[must_use]
pub fn evaluate(board: &Board) -> Outcome {
    let winner = winning_line(board).map(|(_, player)| player);
    let full = board.is_full();

    match (winner, full) {
        (Some(player), _) => Outcome::Win(player),
        (None, true) => Outcome::Draw,
        (None, false) => Outcome::Ongoing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(rows: &[&str]) -> Board {
        let mut board = Board::new(rows.len());
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let cell = match ch {
                    'X' => Cell::Occupied(Player::PlayerOne),
                    'O' => Cell::Occupied(Player::PlayerTwo),
                    _ => Cell::Empty,
                };
                board.set(r, c, cell).unwrap();
            }
        }
        board
    }

    #[test]
    fn test_lines_count() {
        for size in 1..=6 {
            assert_eq!(lines(size).count(), 2 * size + 2);
        }
    }

    #[test]
    fn test_line_cells() {
        let anti: Vec<_> = Line::AntiDiagonal.cells(4).collect();
        assert_eq!(anti, vec![(0, 3), (1, 2), (2, 1), (3, 0)]);

        let col: Vec<_> = Line::Column(2).cells(3).collect();
        assert_eq!(col, vec![(0, 2), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_empty_board_ongoing() {
        assert_eq!(evaluate(&Board::new(4)), Outcome::Ongoing);
        assert_eq!(winning_line(&Board::new(4)), None);
    }

    #[test]
    fn test_row_win() {
        let board = board_from(&["....", "OOOO", "XX..", "X..."]);
        assert_eq!(winning_line(&board), Some((Line::Row(1), Player::PlayerTwo)));
        assert_eq!(evaluate(&board), Outcome::Win(Player::PlayerTwo));
    }

    #[test]
    fn test_column_win() {
        let board = board_from(&["..X.", "O.X.", "O.X.", "..X."]);
        assert_eq!(winning_line(&board), Some((Line::Column(2), Player::PlayerOne)));
    }

    #[test]
    fn test_diagonal_wins() {
        let board = board_from(&["X...", ".X..", "..X.", "...X"]);
        assert_eq!(winning_line(&board), Some((Line::Diagonal, Player::PlayerOne)));

        let board = board_from(&["...O", "..O.", ".O..", "O..."]);
        assert_eq!(winning_line(&board), Some((Line::AntiDiagonal, Player::PlayerTwo)));
    }

    #[test]
    fn test_incomplete_line() {
        let board = board_from(&["XXX.", "....", "....", "...."]);
        assert_eq!(evaluate(&board), Outcome::Ongoing);
    }

    #[test]
    fn test_draw() {
        let board = board_from(&["XXOO", "OOXX", "XXOO", "OOXX"]);
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_win_beats_full_board() {
        let board = board_from(&["XXXX", "OOXO", "XOOX", "OXOO"]);
        assert!(board.is_full());
        assert_eq!(evaluate(&board), Outcome::Win(Player::PlayerOne));
    }

    #[test]
    fn test_first_line_wins_tie_break() {
        // Row 0 (X) is checked before row 1 (O)
        let board = board_from(&["XXXX", "OOOO", "....", "...."]);
        assert_eq!(winning_line(&board), Some((Line::Row(0), Player::PlayerOne)));

        // Column 0 (O) is checked before column 1 (X)
        let board = board_from(&["OX..", "OX..", "OX..", "OX.."]);
        assert_eq!(winning_line(&board), Some((Line::Column(0), Player::PlayerTwo)));

        // Diagonal (X) is checked before anti-diagonal (O)
        let board = board_from(&["X..O", ".XO.", ".OX.", "O..X"]);
        assert_eq!(winning_line(&board), Some((Line::Diagonal, Player::PlayerOne)));
        assert_eq!(evaluate(&board), Outcome::Win(Player::PlayerOne));
    }

    #[test]
    fn test_single_cell_board() {
        let board = board_from(&["O"]);
        assert_eq!(evaluate(&board), Outcome::Win(Player::PlayerTwo));
    }
}

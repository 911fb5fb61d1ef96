//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning triples, in evaluation order.
///
/// Rows first, then columns, then diagonals. When a board holds more than one
/// complete line, the first one in this order is the one reported.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: who owns it and which three cells form it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct WinningLine {
    winner: Player,
    cells: [Position; 3],
}

impl WinningLine {
    /// Returns the player owning the line.
    pub fn winner(&self) -> Player {
        self.winner
    }

    /// Returns the three cells of the line.
    pub fn cells(&self) -> [Position; 3] {
        self.cells
    }

    /// Returns the three cells as board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.cells.map(Position::to_index)
    }

    /// Checks whether `pos` is one of the winning cells.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

/// Evaluates the board for a completed line.
///
/// Returns the first line in [`LINES`] order whose three squares hold the
/// same mark. Draws are not reported here; see [`super::is_draw`].
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<WinningLine> {
    LINES.into_iter().find_map(|cells| {
        let [a, b, c] = cells;
        match board.get(a) {
            Square::Occupied(player)
                if board.get(b) == Square::Occupied(player)
                    && board.get(c) == Square::Occupied(player) =>
            {
                Some(WinningLine::new(player, cells))
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(idx, player) in marks {
            let pos = Position::from_index(idx).expect("index in range");
            board.set(pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for cells in LINES {
            for player in [Player::X, Player::O] {
                let marks: Vec<_> = cells.iter().map(|p| (p.to_index(), player)).collect();
                let line = evaluate(&board_with(&marks)).expect("line should win");
                assert_eq!(line.winner(), player);
                assert_eq!(line.cells(), cells);
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[(0, Player::X), (1, Player::O), (2, Player::X)]);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(0, Player::X), (1, Player::X)]);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins_tie() {
        // Top row and left column both complete; rows are checked first.
        let board = board_with(&[
            (0, Player::X),
            (1, Player::X),
            (2, Player::X),
            (3, Player::X),
            (6, Player::X),
        ]);
        assert_eq!(evaluate(&board).map(|l| l.indices()), Some([0, 1, 2]));

        // Left column and main diagonal; columns precede diagonals.
        let board = board_with(&[
            (0, Player::O),
            (3, Player::O),
            (6, Player::O),
            (4, Player::O),
            (8, Player::O),
        ]);
        assert_eq!(evaluate(&board).map(|l| l.indices()), Some([0, 3, 6]));
    }

    #[test]
    fn test_winning_line_contains() {
        let board = board_with(&[(2, Player::O), (4, Player::O), (6, Player::O)]);
        let line = evaluate(&board).expect("anti-diagonal");
        assert!(line.contains(Position::Center));
        assert!(!line.contains(Position::TopLeft));
        assert_eq!(line.indices(), [2, 4, 6]);
    }
}

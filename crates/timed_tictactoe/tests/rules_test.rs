//! Tests for win and draw evaluation.

use timed_tictactoe::rules::{LINES, is_draw};
use timed_tictactoe::{Board, Player, Position, Square, evaluate};

fn board_from_rows(rows: &str) -> Board {
    let mut squares = [Square::Empty; 9];
    for (slot, c) in squares
        .iter_mut()
        .zip(rows.chars().filter(|c| !c.is_whitespace()))
    {
        *slot = match c {
            'X' => Square::Occupied(Player::X),
            'O' => Square::Occupied(Player::O),
            _ => Square::Empty,
        };
    }
    Board::from(squares)
}

fn line_complete(board: &Board, cells: [Position; 3]) -> Option<Player> {
    match board.get(cells[0]) {
        Square::Occupied(p) if cells.iter().all(|c| board.get(*c) == Square::Occupied(p)) => {
            Some(p)
        }
        _ => None,
    }
}

#[test]
fn test_draw_board_has_no_winner() {
    let board = board_from_rows("XOX XOO OXX");
    assert_eq!(evaluate(&board), None);
    assert!(board.is_full());
    assert!(is_draw(&board));
}

#[test]
fn test_win_on_full_board_is_not_draw() {
    let board = board_from_rows("XOX OXO OXX");
    let line = evaluate(&board).expect("main diagonal");
    assert_eq!(line.winner(), Player::X);
    assert_eq!(line.indices(), [0, 4, 8]);
    assert!(!is_draw(&board));
}

#[test]
fn test_evaluate_agrees_with_line_scan_on_every_board() {
    for code in 0..3usize.pow(9) {
        let mut squares = [Square::Empty; 9];
        let mut rest = code;
        for slot in squares.iter_mut() {
            *slot = match rest % 3 {
                0 => Square::Empty,
                1 => Square::Occupied(Player::X),
                _ => Square::Occupied(Player::O),
            };
            rest /= 3;
        }
        let board = Board::from(squares);

        let expected = LINES
            .iter()
            .find_map(|cells| line_complete(&board, *cells).map(|p| (p, *cells)));

        match (evaluate(&board), expected) {
            (None, None) => {}
            (Some(line), Some((winner, cells))) => {
                assert_eq!(line.winner(), winner, "board {:?}", board);
                assert_eq!(line.cells(), cells, "board {:?}", board);
            }
            (got, want) => panic!("board {:?}: got {:?}, want {:?}", board, got, want),
        }
    }
}

#[test]
fn test_line_order_is_rows_columns_diagonals() {
    let indices: Vec<[usize; 3]> = LINES
        .iter()
        .map(|cells| cells.map(Position::to_index))
        .collect();
    assert_eq!(
        indices,
        [
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ]
    );
}

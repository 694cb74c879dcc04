//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell};
use super::win::check_win;
use tracing::instrument;

/// Checks if every cell is occupied.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A full board with no completed line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_win(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Mark, Position};
    use super::*;

    fn fill(pattern: [Mark; 9]) -> Board {
        let mut board = Board::new();
        for (pos, mark) in Position::ALL.iter().zip(pattern) {
            board.set(*pos, Cell::Occupied(mark));
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Cell::Occupied(Mark::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        use Mark::{O, X};
        // X O X / X O O / O X X
        let board = fill([X, O, X, X, O, O, O, X, X]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        use Mark::{O, X};
        // X X X / O O X / X O O
        let board = fill([X, X, X, O, O, X, X, O, O]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}

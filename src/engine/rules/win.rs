//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Position, Win, WinningLine};
use tracing::instrument;

/// The eight winning lines, in scan order: rows, then columns, then diagonals.
pub const LINES: [WinningLine; 8] = [
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

/// Returns the first completed line in [`LINES`] order, or `None`.
///
/// When one placement completes several lines, the earliest one listed wins
/// the tie.
#[instrument(skip(board))]
pub fn check_win(board: &Board) -> Option<Win> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match board.get(a) {
            Cell::Occupied(mark) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some(Win { mark, line })
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Mark;

    fn board_with(mark: Mark, positions: &[Position]) -> Board {
        let mut board = Board::new();
        for pos in positions {
            board.set(*pos, Cell::Occupied(mark));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_win(&Board::new()), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            for mark in [Mark::X, Mark::O] {
                let board = board_with(mark, &line);
                assert_eq!(check_win(&board), Some(Win { mark, line }), "line {:?}", line);
            }
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Mark::X, &[Position::TopLeft, Position::TopCenter]);
        assert_eq!(check_win(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = board_with(Mark::X, &[Position::TopLeft, Position::TopCenter]);
        board.set(Position::TopRight, Cell::Occupied(Mark::O));
        assert_eq!(check_win(&board), None);
    }

    #[test]
    fn test_first_listed_line_wins_tie() {
        // Top row and left column share the corner.
        let board = board_with(
            Mark::X,
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
        );
        assert_eq!(check_win(&board).map(|w| w.line), Some(LINES[0]));
    }

    #[test]
    fn test_column_reported_before_diagonal() {
        let board = board_with(
            Mark::O,
            &[
                Position::TopLeft,
                Position::Center,
                Position::BottomRight,
                Position::TopCenter,
                Position::BottomCenter,
            ],
        );
        assert_eq!(check_win(&board).map(|w| w.line), Some(LINES[4]));
    }
}

//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! the engine so the outcome can always be recomputed from the board alone.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_win};

use super::{Board, Outcome};

/// Derives the outcome of `board`.
///
/// A completed line wins; otherwise a full board is a draw.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(win) = check_win(board) {
        Outcome::Win(win)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

//! Placements as first-class records, and the reasons a move is refused.

use super::{Mark, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// One placement in the move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct HistoryEntry {
    /// Where the mark went.
    pub position: Position,
    /// The mark that was placed.
    pub mark: Mark,
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why an engine operation was refused.
///
/// The engine's public `place`/`undo` swallow these; `try_place`/`try_undo`
/// hand them back to callers that want to know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Index is not on the board.
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The cell is already taken.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game has been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// History is empty.
    #[display("No move to undo")]
    NothingToUndo,
}

impl std::error::Error for MoveError {}

//! Focus movement for keyboard navigation.

use crate::engine::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Direction an arrow key moves focus.
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
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    /// Toward column 0.
    Left,
    /// Toward column 2.
    Right,
    /// Toward row 0.
    Up,
    /// Toward row 2.
    Down,
}

/// Moves focus one cell in `direction`.
///
/// Horizontal moves wrap within the row and vertical moves wrap within the
/// column, so focus never leaves the board.
#[instrument]
pub fn navigate(from: Position, direction: Direction) -> Position {
    let idx = from.to_index();
    let next = match direction {
        Direction::Left if idx % 3 == 0 => idx + 2,
        Direction::Left => idx - 1,
        Direction::Right if idx % 3 == 2 => idx - 2,
        Direction::Right => idx + 1,
        Direction::Up if idx < 3 => idx + 6,
        Direction::Up => idx - 3,
        Direction::Down if idx > 5 => idx - 6,
        Direction::Down => idx + 3,
    };
    Position::from_index(next).unwrap_or(from)
}

//! Preconditions for engine operations.
//!
//! Each check is a named, independently testable unit. The engine composes
//! them before mutating anything, so a refused operation never leaves a
//! half-applied change behind.

use super::action::MoveError;
use super::game::GameEngine;
use super::Position;
use tracing::instrument;

/// Precondition: the index names a cell on the board.
pub struct IndexInRange;

impl IndexInRange {
    /// Resolves `index` to a position.
    #[instrument]
    pub fn check(index: usize) -> Result<Position, MoveError> {
        Position::from_index(index).ok_or(MoveError::OutOfRange(index))
    }
}

/// Precondition: the game has not been won or drawn.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails once the game has a winner or is drawn.
    #[instrument(skip(engine))]
    pub fn check(engine: &GameEngine) -> Result<(), MoveError> {
        if engine.is_game_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails if `pos` already holds a mark.
    #[instrument(skip(engine))]
    pub fn check(pos: Position, engine: &GameEngine) -> Result<(), MoveError> {
        if engine.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Precondition: there is something to pop from the history.
pub struct HistoryNotEmpty;

impl HistoryNotEmpty {
    /// Fails when there is no move to take back.
    #[instrument(skip(engine))]
    pub fn check(engine: &GameEngine) -> Result<(), MoveError> {
        if engine.history().is_empty() {
            Err(MoveError::NothingToUndo)
        } else {
            Ok(())
        }
    }
}

/// Composite precondition for `place`.
pub struct LegalPlace;

impl LegalPlace {
    /// Validates a placement, returning the resolved position.
    #[instrument(skip(engine))]
    pub fn check(index: usize, engine: &GameEngine) -> Result<Position, MoveError> {
        let pos = IndexInRange::check(index)?;
        GameNotOver::check(engine)?;
        SquareIsEmpty::check(pos, engine)?;
        Ok(pos)
    }
}

/// Composite precondition for `undo`.
///
/// Undo is only allowed during active play; a finished game stays finished
/// until it is reset.
pub struct LegalUndo;

impl LegalUndo {
    /// Validates an undo.
    #[instrument(skip(engine))]
    pub fn check(engine: &GameEngine) -> Result<(), MoveError> {
        HistoryNotEmpty::check(engine)?;
        GameNotOver::check(engine)?;
        Ok(())
    }
}

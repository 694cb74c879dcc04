//! Tic-tac-toe game engine.
//!
//! The [`GameEngine`] owns the board, turn, starting mark, move count, and
//! move history. The [`Outcome`] is never stored: it is recomputed from the
//! board by [`rules::evaluate`].

mod action;
mod contracts;
mod game;
mod outcome;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{HistoryEntry, MoveError};
pub use contracts::{
    GameNotOver, HistoryNotEmpty, IndexInRange, LegalPlace, LegalUndo, SquareIsEmpty,
};
pub use game::{GameEngine, Snapshot};
pub use outcome::{Outcome, Win, WinningLine};
pub use position::Position;
pub use types::{Board, Cell, Mark};

//! Move counter invariant: the counter agrees with the board.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: `moves_played` equals the number of occupied cells.
pub struct MovesMatchBoardInvariant;

impl Invariant<GameEngine> for MovesMatchBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.moves_played() == engine.board().occupied_count()
    }

    fn description() -> &'static str {
        "Move count matches number of occupied cells"
    }
}

//! Game-over flag invariant.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: the game-over flag is set exactly when the derived outcome is
/// terminal.
pub struct OutcomeMatchesFlagInvariant;

impl Invariant<GameEngine> for OutcomeMatchesFlagInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.is_game_over() == engine.outcome().is_terminal()
    }

    fn description() -> &'static str {
        "Game-over flag matches the board's outcome"
    }
}

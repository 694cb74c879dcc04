//! Turn parity invariant: marks alternate starting from the starting mark.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: the board and turn agree with strict alternation.
///
/// The starting mark has either as many cells as the other mark, or one more.
/// While play continues, the turn belongs to the starting mark exactly when
/// the counts are level. A won game keeps the winner's turn, so the turn is
/// not checked once the game is over.
pub struct TurnParityInvariant;

impl Invariant<GameEngine> for TurnParityInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let first = engine.starting_mark();
        let first_count = engine.board().count(first);
        let second_count = engine.board().count(first.opponent());

        if first_count != second_count && first_count != second_count + 1 {
            return false;
        }

        if engine.is_game_over() {
            return true;
        }

        let expected = if first_count == second_count {
            first
        } else {
            first.opponent()
        };
        engine.current_mark() == expected
    }

    fn description() -> &'static str {
        "Marks alternate from the starting mark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Mark;

    #[test]
    fn test_holds_with_swapped_start() {
        let mut engine = GameEngine::new();
        engine.swap_starting_mark();
        assert_eq!(engine.current_mark(), Mark::O);
        engine.place(4);
        assert!(TurnParityInvariant::holds(&engine));
        engine.place(0);
        assert!(TurnParityInvariant::holds(&engine));
    }

    #[test]
    fn test_holds_after_undo() {
        let mut engine = GameEngine::new();
        engine.place(4);
        engine.place(0);
        engine.undo();
        assert_eq!(engine.current_mark(), Mark::O);
        assert!(TurnParityInvariant::holds(&engine));
    }

    #[test]
    fn test_holds_on_won_game() {
        let mut engine = GameEngine::new();
        for idx in [0, 3, 1, 4, 2] {
            engine.place(idx);
        }
        assert!(engine.is_game_over());
        assert!(TurnParityInvariant::holds(&engine));
    }
}

//! History consistency invariant: the log replays to the board.

use super::super::{Board, Cell, GameEngine};
use super::Invariant;

/// Invariant: the history has one entry per ply and replays onto an empty
/// board to reproduce the current board.
///
/// `clear_history` breaks this on purpose, so it is not part of
/// [`EngineInvariants`](super::EngineInvariants).
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        if engine.history().len() != engine.moves_played() {
            return false;
        }

        let mut replayed = Board::new();
        for entry in engine.history() {
            if !replayed.is_empty(entry.position) {
                return false;
            }
            replayed.set(entry.position, Cell::Occupied(entry.mark));
        }
        replayed == *engine.board()
    }

    fn description() -> &'static str {
        "History replays to the current board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn test_holds_through_play_and_undo() {
        let mut engine = GameEngine::new();
        for idx in [0, 4, 8, 2] {
            engine.place(idx);
            assert!(HistoryConsistentInvariant::holds(&engine));
        }
        engine.undo();
        engine.undo();
        assert!(HistoryConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_broken_by_clear_history() {
        let mut engine = GameEngine::new();
        engine.place(0);
        engine.place(4);
        engine.clear_history();
        assert!(!HistoryConsistentInvariant::holds(&engine));
    }
}

//! The game engine: board, turn, history, and outcome.

use super::action::{HistoryEntry, MoveError};
use super::contracts::{LegalPlace, LegalUndo};
use super::invariants::{EngineInvariants, InvariantSet};
use super::{Board, Cell, Mark, Outcome, Position, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
///
/// Owns all mutable game state. Mutating operations either apply completely
/// or leave the engine untouched: `place` and `undo` ignore illegal requests,
/// while `try_place` and `try_undo` report why they were refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    turn: Mark,
    starting_mark: Mark,
    moves: usize,
    history: Vec<HistoryEntry>,
    game_over: bool,
}

impl GameEngine {
    /// Creates an engine where X moves first.
    #[instrument]
    pub fn new() -> Self {
        Self::with_starting_mark(Mark::X)
    }

    /// Creates an engine where `starting_mark` moves first.
    #[instrument]
    pub fn with_starting_mark(starting_mark: Mark) -> Self {
        Self {
            board: Board::new(),
            turn: starting_mark,
            starting_mark,
            moves: 0,
            history: Vec::new(),
            game_over: false,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Operations
    // ─────────────────────────────────────────────────────────────

    /// Places the current mark at `index` (0-8).
    ///
    /// Out-of-range indices, occupied cells, and finished games are ignored.
    #[instrument(skip(self), fields(mark = %self.turn))]
    pub fn place(&mut self, index: usize) {
        if let Err(error) = self.try_place(index) {
            debug!(%error, "Placement ignored");
        }
    }

    /// Places the current mark at `index`, returning the resulting outcome.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfRange`] if `index >= 9`
    /// - [`MoveError::GameOver`] if the game has been won or drawn
    /// - [`MoveError::SquareOccupied`] if the cell is taken
    #[instrument(skip(self), fields(mark = %self.turn))]
    pub fn try_place(&mut self, index: usize) -> Result<Outcome, MoveError> {
        let pos = LegalPlace::check(index, self)?;
        let mark = self.turn;

        self.board.set(pos, Cell::Occupied(mark));
        self.moves += 1;
        self.history.push(HistoryEntry::new(pos, mark));

        let outcome = if let Some(win) = rules::check_win(&self.board) {
            self.game_over = true;
            info!(winner = %win.mark, line = ?win.indices(), "Game won");
            Outcome::Win(win)
        } else if self.moves >= 9 {
            self.game_over = true;
            info!("Game drawn");
            Outcome::Draw
        } else {
            self.turn = mark.opponent();
            Outcome::InProgress
        };

        self.assert_invariants();
        Ok(outcome)
    }

    /// Takes back the most recent placement.
    ///
    /// Ignored when there is no history or the game is over.
    #[instrument(skip(self))]
    pub fn undo(&mut self) {
        if let Err(error) = self.try_undo() {
            debug!(%error, "Undo ignored");
        }
    }

    /// Takes back the most recent placement, returning the removed entry.
    ///
    /// The turn goes back to the mark whose move was undone.
    ///
    /// # Errors
    ///
    /// - [`MoveError::NothingToUndo`] if the history is empty
    /// - [`MoveError::GameOver`] if the game has been won or drawn
    #[instrument(skip(self))]
    pub fn try_undo(&mut self) -> Result<HistoryEntry, MoveError> {
        LegalUndo::check(self)?;
        let Some(entry) = self.history.pop() else {
            return Err(MoveError::NothingToUndo);
        };

        self.board.set(entry.position, Cell::Empty);
        self.moves = self.moves.saturating_sub(1);
        self.turn = entry.mark;
        self.game_over = false;
        debug!(%entry, "Move undone");

        self.assert_invariants();
        Ok(entry)
    }

    /// Starts a fresh game with the current starting mark.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = self.starting_mark;
        self.moves = 0;
        self.history.clear();
        self.game_over = false;
        info!(starting_mark = %self.starting_mark, "Game reset");
        self.assert_invariants();
    }

    /// Toggles which mark moves first, then resets.
    #[instrument(skip(self))]
    pub fn swap_starting_mark(&mut self) {
        self.starting_mark = self.starting_mark.opponent();
        self.reset();
    }

    /// Discards the move history without touching the board.
    ///
    /// Moves already on the board can no longer be undone afterwards.
    #[instrument(skip(self), fields(discarded = self.history.len()))]
    pub fn clear_history(&mut self) {
        self.history.clear();
        debug!(moves = self.moves, "History cleared");
    }

    // ─────────────────────────────────────────────────────────────
    //  Observations
    // ─────────────────────────────────────────────────────────────

    /// Mark to move next. After a win this is still the winner.
    pub fn current_mark(&self) -> Mark {
        self.turn
    }

    /// Mark that moves first after a reset.
    pub fn starting_mark(&self) -> Mark {
        self.starting_mark
    }

    /// Plies played since the last reset.
    pub fn moves_played(&self) -> usize {
        self.moves
    }

    /// True once the game is won or drawn.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Outcome derived from the current board.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(&self.board)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Copy of the nine cells in row-major order.
    pub fn board_snapshot(&self) -> [Cell; 9] {
        *self.board.cells()
    }

    /// Returns the move history, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Positions where a placement would be accepted.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.game_over {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Collects every observation into one serializable value.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board_snapshot(),
            current_mark: self.turn,
            starting_mark: self.starting_mark,
            moves_played: self.moves,
            game_over: self.game_over,
            outcome: self.outcome(),
            history: self.history.clone(),
        }
    }

    fn assert_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = EngineInvariants::check_all(self)
        {
            warn!(?violations, "Engine invariants violated");
            debug_assert!(false, "Engine invariants violated: {:?}", violations);
        }
    }

    #[cfg(test)]
    pub(crate) fn corrupt_moves(&mut self, moves: usize) {
        self.moves = moves;
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Every engine observation at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Cells in row-major order.
    pub board: [Cell; 9],
    /// Mark to move next.
    pub current_mark: Mark,
    /// Mark that moves first after a reset.
    pub starting_mark: Mark,
    /// Plies played since the last reset.
    pub moves_played: usize,
    /// True once the game is won or drawn.
    pub game_over: bool,
    /// Derived outcome.
    pub outcome: Outcome,
    /// Move history, oldest first.
    pub history: Vec<HistoryEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine() {
        let engine = GameEngine::new();
        assert_eq!(engine.current_mark(), Mark::X);
        assert_eq!(engine.starting_mark(), Mark::X);
        assert_eq!(engine.moves_played(), 0);
        assert!(!engine.is_game_over());
        assert_eq!(engine.outcome(), Outcome::InProgress);
        assert_eq!(engine.board_snapshot(), [Cell::Empty; 9]);
        assert_eq!(engine.valid_moves().len(), 9);
    }

    #[test]
    fn test_try_place_reports_outcome() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.try_place(0), Ok(Outcome::InProgress));
        assert_eq!(engine.current_mark(), Mark::O);
        assert_eq!(engine.history(), &[HistoryEntry::new(Position::TopLeft, Mark::X)]);
    }

    #[test]
    fn test_try_place_errors() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.try_place(42), Err(MoveError::OutOfRange(42)));
        engine.place(0);
        assert_eq!(
            engine.try_place(0),
            Err(MoveError::SquareOccupied(Position::TopLeft))
        );
    }

    #[test]
    fn test_win_does_not_advance_turn() {
        let mut engine = GameEngine::new();
        for idx in [0, 3, 1, 4] {
            engine.place(idx);
        }
        let outcome = engine.try_place(2).unwrap();
        assert_eq!(outcome.winner(), Some(Mark::X));
        assert_eq!(engine.current_mark(), Mark::X);
        assert!(engine.valid_moves().is_empty());
    }

    #[test]
    fn test_try_undo_returns_entry() {
        let mut engine = GameEngine::new();
        engine.place(4);
        assert_eq!(
            engine.try_undo(),
            Ok(HistoryEntry::new(Position::Center, Mark::X))
        );
        assert_eq!(engine.try_undo(), Err(MoveError::NothingToUndo));
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut engine = GameEngine::new();
        engine.place(4);
        let json = serde_json::to_value(engine.snapshot()).unwrap();
        assert_eq!(json["moves_played"], 1);
        assert_eq!(json["current_mark"], "O");
        assert_eq!(json["outcome"], "InProgress");
        assert_eq!(json["board"][4]["Occupied"], "X");
    }
}

//! Status line text, announcements, and per-cell accessibility state.

use crate::engine::{Cell, GameEngine, Mark, Outcome, Position};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// Default text: whose turn it is.
pub fn turn_text(mark: Mark) -> String {
    format!("Player {}'s Turn", mark)
}

/// Headline for a finished game, if it is finished.
pub fn result_text(outcome: &Outcome) -> Option<String> {
    match outcome {
        Outcome::InProgress => None,
        Outcome::Win(win) => Some(format!("Player {} Wins!", win.mark)),
        Outcome::Draw => Some("Draw!".to_string()),
    }
}

/// Moves counter text.
pub fn moves_text(moves: usize) -> String {
    format!("Moves: {}", moves)
}

/// Label on the swap-start button.
pub fn swap_label(starting_mark: Mark) -> String {
    format!("Start: {}", starting_mark)
}

/// Accessible label for one cell, numbered from 1.
pub fn cell_label(pos: Position, cell: Cell) -> String {
    let content = match cell {
        Cell::Empty => "empty".to_string(),
        Cell::Occupied(mark) => mark.to_string(),
    };
    format!("Cell {}: {}", pos.to_index() + 1, content)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Announcement {
    text: String,
    /// `None` keeps the message until something replaces it.
    expires_at: Option<Instant>,
}

/// Message area above the board.
///
/// Shows an announcement when one is active, otherwise the turn (or, once the
/// game has ended, the result). Announcements made while the game is running
/// expire after `announce_duration`; those made after it has ended stay up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    announcement: Option<Announcement>,
    announce_duration: Duration,
}

impl StatusLine {
    /// Creates an empty status line.
    pub fn new(announce_duration: Duration) -> Self {
        Self {
            announcement: None,
            announce_duration,
        }
    }

    /// Shows `text`, expiring it unless the game is over.
    #[instrument(skip(self, text, now))]
    pub fn announce(&mut self, text: impl Into<String>, game_over: bool, now: Instant) {
        let expires_at = (!game_over).then(|| now + self.announce_duration);
        let text = text.into();
        debug!(%text, sticky = game_over, "Announcing");
        self.announcement = Some(Announcement { text, expires_at });
    }

    /// Drops any announcement.
    pub fn clear(&mut self) {
        self.announcement = None;
    }

    /// The announcement visible at `now`, if any.
    pub fn active_message(&self, now: Instant) -> Option<&str> {
        self.announcement
            .as_ref()
            .filter(|a| a.expires_at.is_none_or(|at| now < at))
            .map(|a| a.text.as_str())
    }

    /// Text to show at `now`.
    pub fn text(&self, engine: &GameEngine, now: Instant) -> String {
        if let Some(message) = self.active_message(now) {
            return message.to_string();
        }
        result_text(&engine.outcome()).unwrap_or_else(|| turn_text(engine.current_mark()))
    }

    /// Turn badge, shown only while the plain turn text is.
    pub fn badge(&self, engine: &GameEngine, now: Instant) -> Option<Mark> {
        let showing_turn =
            self.active_message(now).is_none() && !engine.outcome().is_terminal();
        showing_turn.then(|| engine.current_mark())
    }
}

/// How a cell is emphasized after a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Highlight {
    /// No emphasis.
    #[default]
    None,
    /// Part of the winning line.
    Winning,
    /// Not part of the winning line.
    Dimmed,
}

/// Everything a frontend needs to draw one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// Board index (0-8).
    pub index: usize,
    /// Mark shown in the cell.
    pub mark: Option<Mark>,
    /// Accessible label, e.g. `Cell 5: X`.
    pub label: String,
    /// Input is refused (occupied cell or finished game).
    pub disabled: bool,
    /// Win emphasis.
    pub highlight: Highlight,
    /// Keyboard focus is here.
    pub focused: bool,
}

impl CellView {
    /// Builds the view of `pos`.
    pub fn new(engine: &GameEngine, pos: Position, focus: Option<Position>) -> Self {
        let cell = engine.board().get(pos);
        let highlight = match engine.outcome() {
            Outcome::Win(win) if win.contains(pos) => Highlight::Winning,
            Outcome::Win(_) => Highlight::Dimmed,
            _ => Highlight::None,
        };
        Self {
            index: pos.to_index(),
            mark: cell.mark(),
            label: cell_label(pos, cell),
            disabled: !cell.is_empty() || engine.is_game_over(),
            highlight,
            focused: focus == Some(pos),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: Duration = Duration::from_millis(900);

    #[test]
    fn test_turn_text_by_default() {
        let engine = GameEngine::new();
        let status = StatusLine::new(DURATION);
        let now = Instant::now();
        assert_eq!(status.text(&engine, now), "Player X's Turn");
        assert_eq!(status.badge(&engine, now), Some(Mark::X));
    }

    #[test]
    fn test_transient_announcement_expires() {
        let engine = GameEngine::new();
        let mut status = StatusLine::new(DURATION);
        let now = Instant::now();
        status.announce("Move history cleared", false, now);

        assert_eq!(status.text(&engine, now), "Move history cleared");
        assert_eq!(status.badge(&engine, now), None);

        let later = now + DURATION;
        assert_eq!(status.text(&engine, later), "Player X's Turn");
        assert_eq!(status.badge(&engine, later), Some(Mark::X));
    }

    #[test]
    fn test_sticky_announcement_stays() {
        let engine = GameEngine::new();
        let mut status = StatusLine::new(DURATION);
        let now = Instant::now();
        status.announce("Player X wins", true, now);
        assert_eq!(
            status.text(&engine, now + Duration::from_secs(60)),
            "Player X wins"
        );
    }

    #[test]
    fn test_result_text_after_clear() {
        let mut engine = GameEngine::new();
        for idx in [0, 3, 1, 4, 2] {
            engine.place(idx);
        }
        let status = StatusLine::new(DURATION);
        let now = Instant::now();
        assert_eq!(status.text(&engine, now), "Player X Wins!");
        assert_eq!(status.badge(&engine, now), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(cell_label(Position::TopLeft, Cell::Empty), "Cell 1: empty");
        assert_eq!(
            cell_label(Position::BottomRight, Cell::Occupied(Mark::O)),
            "Cell 9: O"
        );
        assert_eq!(moves_text(3), "Moves: 3");
        assert_eq!(swap_label(Mark::O), "Start: O");
        assert_eq!(result_text(&Outcome::Draw).as_deref(), Some("Draw!"));
    }

    #[test]
    fn test_cell_view_highlights_win() {
        let mut engine = GameEngine::new();
        for idx in [0, 3, 1, 4, 2] {
            engine.place(idx);
        }
        let winning = CellView::new(&engine, Position::TopCenter, None);
        assert_eq!(winning.highlight, Highlight::Winning);
        assert!(winning.disabled);

        let other = CellView::new(&engine, Position::BottomRight, Some(Position::BottomRight));
        assert_eq!(other.highlight, Highlight::Dimmed);
        assert!(other.disabled);
        assert!(other.focused);
        assert_eq!(other.label, "Cell 9: empty");
    }
}

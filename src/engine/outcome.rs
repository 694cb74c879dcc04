//! Game outcome, derived from the board.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// The three positions that completed a win.
pub type WinningLine = [Position; 3];

/// A completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    /// Mark that owns the line.
    pub mark: Mark,
    /// The line itself.
    pub line: WinningLine,
}

impl Win {
    /// Line as board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Position::to_index)
    }

    /// Checks whether `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// State of play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// A mark completed a line.
    Win(Win),
    /// Board filled with no line.
    Draw,
}

impl Outcome {
    /// True for `Win` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(win) => Some(win.mark),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            Outcome::Win(win) => Some(win.line),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(win) => {
                let [a, b, c] = win.indices();
                write!(f, "Player {} wins ({}, {}, {})", win.mark, a, b, c)
            }
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

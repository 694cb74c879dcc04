//! Input events and the table that maps them to engine commands.
//!
//! Frontends translate whatever their device reports into an [`Event`].
//! [`resolve`] is the only place that decides what an event means.

use super::navigation::Direction;
use crate::engine::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A key press, named after the DOM `KeyboardEvent.key` values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Key {
    /// Left arrow.
    #[strum(serialize = "ArrowLeft", serialize = "Left")]
    ArrowLeft,
    /// Right arrow.
    #[strum(serialize = "ArrowRight", serialize = "Right")]
    ArrowRight,
    /// Up arrow.
    #[strum(serialize = "ArrowUp", serialize = "Up")]
    ArrowUp,
    /// Down arrow.
    #[strum(serialize = "ArrowDown", serialize = "Down")]
    ArrowDown,
    /// Enter / Return.
    #[strum(serialize = "Enter", serialize = "Return")]
    Enter,
    /// Space bar.
    #[strum(serialize = "Space", serialize = " ")]
    Space,
    /// Any key without a binding.
    #[strum(default)]
    Other(String),
}

/// Buttons next to the board.
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
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Control {
    /// Start a new game.
    Restart,
    /// Swap which mark starts, then start a new game.
    SwapStart,
    /// Take back the last move.
    Undo,
    /// Forget the move history.
    ClearHistory,
}

/// Something the user did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A cell was clicked or tapped.
    CellClicked(Position),
    /// A key was pressed while focus was wherever the controller says it is.
    KeyPressed(Key),
    /// Focus moved onto a cell (tab, pointer).
    FocusCell(Position),
    /// Focus left the board.
    Blur,
    /// A control button was pressed.
    ControlPressed(Control),
    /// The board was double-clicked.
    BoardDoubleClicked,
}

/// What a key does to the focused cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Place on the focused cell.
    Activate,
    /// Move focus.
    Focus(Direction),
}

/// Key bindings for a focused cell.
pub const KEY_BINDINGS: [(Key, KeyAction); 6] = [
    (Key::Enter, KeyAction::Activate),
    (Key::Space, KeyAction::Activate),
    (Key::ArrowLeft, KeyAction::Focus(Direction::Left)),
    (Key::ArrowRight, KeyAction::Focus(Direction::Right)),
    (Key::ArrowUp, KeyAction::Focus(Direction::Up)),
    (Key::ArrowDown, KeyAction::Focus(Direction::Down)),
];

/// An operation on the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Place the current mark.
    Place(Position),
    /// Move keyboard focus.
    MoveFocus(Direction),
    /// Put focus on a cell, or take it off the board.
    SetFocus(Option<Position>),
    /// Start a new game.
    Reset,
    /// Swap the starting mark and start a new game.
    SwapStartingMark,
    /// Take back the last move.
    Undo,
    /// Forget the move history.
    ClearHistory,
}

/// Looks up the action bound to `key`.
pub fn key_action(key: &Key) -> Option<KeyAction> {
    KEY_BINDINGS
        .iter()
        .find(|(bound, _)| bound == key)
        .map(|(_, action)| *action)
}

/// Maps a control button to its command.
pub fn control_command(control: Control) -> Command {
    match control {
        Control::Restart => Command::Reset,
        Control::SwapStart => Command::SwapStartingMark,
        Control::Undo => Command::Undo,
        Control::ClearHistory => Command::ClearHistory,
    }
}

/// Resolves an event to a command.
///
/// Key presses only mean something while a cell has focus; unbound keys and
/// keys pressed off the board resolve to `None`.
#[instrument]
pub fn resolve(event: &Event, focus: Option<Position>) -> Option<Command> {
    match event {
        Event::CellClicked(pos) => Some(Command::Place(*pos)),
        Event::KeyPressed(key) => {
            let focused = focus?;
            match key_action(key)? {
                KeyAction::Activate => Some(Command::Place(focused)),
                KeyAction::Focus(direction) => Some(Command::MoveFocus(direction)),
            }
        }
        Event::FocusCell(pos) => Some(Command::SetFocus(Some(*pos))),
        Event::Blur => Some(Command::SetFocus(None)),
        Event::ControlPressed(control) => Some(control_command(*control)),
        Event::BoardDoubleClicked => Some(Command::Reset),
    }
}

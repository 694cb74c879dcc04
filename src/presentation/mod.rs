//! Device-agnostic presentation model.
//!
//! Frontends turn their input into [`Event`]s, feed them to a [`Controller`],
//! and draw the [`View`] it returns. Nothing here renders or reads devices.

mod controller;
mod keymap;
mod navigation;
mod status;

pub use controller::{Controller, View};
pub use keymap::{
    Command, Control, Event, KEY_BINDINGS, Key, KeyAction, control_command, key_action, resolve,
};
pub use navigation::{Direction, navigate};
pub use status::{
    CellView, Highlight, StatusLine, cell_label, moves_text, result_text, swap_label, turn_text,
};

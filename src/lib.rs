//! Strictly Tic-Tac-Toe - a two-player game engine with undo and keyboard navigation
//!
//! # Architecture
//!
//! - **Engine**: board, turn alternation, win/draw detection, and a
//!   reversible move history ([`GameEngine`])
//! - **Presentation**: device-agnostic event mapping, focus navigation, and
//!   status text ([`Controller`])
//! - **Config**: TOML-backed settings ([`GameConfig`])
//! - **Script**: plain-text event scripts for replaying sessions
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameEngine, Mark};
//!
//! let mut engine = GameEngine::new();
//! for idx in [0, 4, 1, 5, 2] {
//!     engine.place(idx);
//! }
//! assert_eq!(engine.outcome().winner(), Some(Mark::X));
//! assert!(engine.is_game_over());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod engine;
mod presentation;
mod script;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Engine
pub use engine::{
    Board, Cell, GameEngine, HistoryEntry, Mark, MoveError, Outcome, Position, Snapshot, Win,
    WinningLine, invariants, rules,
};
pub use engine::{
    GameNotOver, HistoryNotEmpty, IndexInRange, LegalPlace, LegalUndo, SquareIsEmpty,
};

// Crate-level exports - Presentation
pub use presentation::{
    CellView, Command, Control, Controller, Direction, Event, Highlight, KEY_BINDINGS, Key,
    KeyAction, StatusLine, View, cell_label, control_command, key_action, moves_text, navigate,
    resolve, result_text, swap_label, turn_text,
};

// Crate-level exports - Scripts
pub use script::{ScriptError, Step, parse_line, parse_script};

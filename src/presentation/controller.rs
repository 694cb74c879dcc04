//! Event dispatch: owns the engine and everything the player sees around it.

use super::keymap::{Command, Event, resolve};
use super::navigation::navigate;
use super::status::{CellView, StatusLine, moves_text, swap_label};
use crate::config::GameConfig;
use crate::engine::{GameEngine, Mark, Outcome, Position};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Drives a [`GameEngine`] from user events.
///
/// The controller is the single owner of the engine. Every event runs to
/// completion before the next one is handled.
#[derive(Debug, Clone)]
pub struct Controller {
    engine: GameEngine,
    focus: Option<Position>,
    status: StatusLine,
}

impl Controller {
    /// Creates a controller with a fresh engine shaped by `config`.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Self {
        Self::with_engine(
            GameEngine::with_starting_mark(*config.starting_mark()),
            config,
        )
    }

    /// Wraps an existing engine.
    #[instrument(skip(engine, config))]
    pub fn with_engine(engine: GameEngine, config: &GameConfig) -> Self {
        Self {
            engine,
            focus: Some(config.initial_focus_position()),
            status: StatusLine::new(config.announce_duration()),
        }
    }

    /// Returns the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Returns the focused cell, if focus is on the board.
    pub fn focus(&self) -> Option<Position> {
        self.focus
    }

    /// Handles one event, returning the command it resolved to.
    #[instrument(skip(self, now))]
    pub fn handle(&mut self, event: &Event, now: Instant) -> Option<Command> {
        let command = resolve(event, self.focus)?;
        self.execute(command, now);
        Some(command)
    }

    /// Runs a command directly.
    #[instrument(skip(self, now))]
    pub fn execute(&mut self, command: Command, now: Instant) {
        match command {
            Command::Place(pos) => self.place(pos, now),
            Command::MoveFocus(direction) => {
                self.focus = self.focus.map(|pos| navigate(pos, direction));
            }
            Command::SetFocus(focus) => {
                self.focus = focus;
            }
            Command::Reset => {
                self.engine.reset();
                self.announce_reset(now);
            }
            Command::SwapStartingMark => {
                self.engine.swap_starting_mark();
                info!(starting_mark = %self.engine.starting_mark(), "Starting mark swapped");
                self.announce_reset(now);
            }
            Command::Undo => {
                if self.engine.try_undo().is_ok() {
                    self.status.clear();
                }
            }
            Command::ClearHistory => {
                self.engine.clear_history();
                self.status
                    .announce("Move history cleared", self.engine.is_game_over(), now);
            }
        }
    }

    fn place(&mut self, pos: Position, now: Instant) {
        let outcome = match self.engine.try_place(pos.to_index()) {
            Ok(outcome) => outcome,
            Err(error) => {
                debug!(%error, "Placement ignored");
                return;
            }
        };

        match outcome {
            Outcome::Win(win) => {
                self.status
                    .announce(format!("Player {} wins", win.mark), true, now);
            }
            Outcome::Draw => self.status.announce("Game is a draw", true, now),
            Outcome::InProgress => self.status.announce(
                format!("Player {}'s turn", self.engine.current_mark()),
                false,
                now,
            ),
        }
    }

    fn announce_reset(&mut self, now: Instant) {
        let message = format!("Game reset. Player {} starts", self.engine.current_mark());
        self.status.announce(message, false, now);
    }

    /// Everything a frontend needs to draw at `now`.
    pub fn view(&self, now: Instant) -> View {
        View {
            cells: Position::ALL.map(|pos| CellView::new(&self.engine, pos, self.focus)),
            status: self.status.text(&self.engine, now),
            badge: self.status.badge(&self.engine, now),
            moves: moves_text(self.engine.moves_played()),
            swap_label: swap_label(self.engine.starting_mark()),
            focus: self.focus.map(Position::to_index),
            outcome: self.engine.outcome(),
        }
    }
}

/// Presentation state at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    /// The nine cells, row-major.
    pub cells: [CellView; 9],
    /// Status line text.
    pub status: String,
    /// Turn badge, hidden while a message is shown.
    pub badge: Option<Mark>,
    /// Moves counter text.
    pub moves: String,
    /// Swap-start button label.
    pub swap_label: String,
    /// Focused cell index.
    pub focus: Option<usize>,
    /// Game outcome.
    pub outcome: Outcome,
}

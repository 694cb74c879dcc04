//! Plain-text event scripts for replaying a session.
//!
//! One step per line; `#` starts a comment.
//!
//! ```text
//! click 4          # cell index 0-8 or a label such as top-left
//! focus center
//! key ArrowRight
//! key Enter
//! blur
//! restart | swap-start | undo | clear-history
//! dblclick
//! wait 900         # advance the clock in milliseconds
//! ```

use crate::engine::Position;
use crate::presentation::{Control, Event, Key};
use derive_more::{Display, Error};
use std::time::Duration;
use tracing::instrument;

/// One line of a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Deliver an event.
    Event(Event),
    /// Let time pass.
    Wait(Duration),
}

/// Script parse error.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Script error on line {}: {}", line, message)]
pub struct ScriptError {
    /// 1-based line number.
    pub line: usize,
    /// What was wrong.
    pub message: String,
}

impl ScriptError {
    fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// Parses a whole script.
#[instrument(skip(source))]
pub fn parse_script(source: &str) -> Result<Vec<Step>, ScriptError> {
    source
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| parse_line(line, idx + 1).transpose())
        .collect()
}

/// Parses one line; blank and comment-only lines yield `None`.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<Step>, ScriptError> {
    let content = line.split('#').next().unwrap_or_default().trim();
    if content.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = content
        .split_once(char::is_whitespace)
        .map(|(verb, rest)| (verb, rest.trim()))
        .unwrap_or((content, ""));

    let position = |arg: &str| {
        Position::from_label_or_number(arg)
            .ok_or_else(|| ScriptError::new(line_no, format!("unknown cell '{}'", arg)))
    };
    let no_args = |step: Step| {
        if rest.is_empty() {
            Ok(step)
        } else {
            Err(ScriptError::new(line_no, format!("'{}' takes no arguments", verb)))
        }
    };

    let step = match verb.to_ascii_lowercase().as_str() {
        "click" => Step::Event(Event::CellClicked(position(rest)?)),
        "focus" => Step::Event(Event::FocusCell(position(rest)?)),
        "key" => {
            if rest.is_empty() {
                return Err(ScriptError::new(line_no, "'key' needs a key name"));
            }
            let key = rest
                .parse::<Key>()
                .map_err(|e| ScriptError::new(line_no, e.to_string()))?;
            Step::Event(Event::KeyPressed(key))
        }
        "wait" => {
            let ms = rest
                .parse::<u64>()
                .map_err(|_| ScriptError::new(line_no, format!("bad duration '{}'", rest)))?;
            Step::Wait(Duration::from_millis(ms))
        }
        "blur" => no_args(Step::Event(Event::Blur))?,
        "dblclick" => no_args(Step::Event(Event::BoardDoubleClicked))?,
        other => match other.parse::<Control>() {
            Ok(control) => no_args(Step::Event(Event::ControlPressed(control)))?,
            Err(_) => {
                return Err(ScriptError::new(line_no, format!("unknown step '{}'", verb)));
            }
        },
    };
    Ok(Some(step))
}

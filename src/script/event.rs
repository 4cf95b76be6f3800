//! Script event types.

use thiserror::Error;

use crate::form::{FormEngine, SubmissionResult};

/// An input event coming from the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
}

impl InputEvent {
    /// Feed this event to the engine
    pub fn apply(&self, engine: &mut FormEngine) -> Option<SubmissionResult> {
        match self {
            InputEvent::EmailChanged(text) => {
                engine.on_email_changed(text.as_str());
                None
            }
            InputEvent::PasswordChanged(text) => {
                engine.on_password_changed(text.as_str());
                None
            }
            InputEvent::Submit => Some(engine.on_submit()),
        }
    }
}

/// A parsed script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Event(InputEvent),
    /// A `#` comment line
    Comment,
    /// An empty or whitespace-only line
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("line {line}: unknown keyword '{keyword}' (expected email, password or submit)")]
    UnknownKeyword { line: usize, keyword: String },
    #[error("line {line}: '{keyword}' does not take an argument")]
    UnexpectedArgument { line: usize, keyword: String },
}

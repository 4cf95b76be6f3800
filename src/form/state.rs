//! Form state types.

use std::fmt;

use serde::Serialize;

/// Latest values observed in the two text fields
#[derive(Clone, Default, PartialEq, Eq)]
pub struct InputState {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for InputState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputState")
            .field("email", &self.email)
            .field("password_len", &self.password.len())
            .finish()
    }
}

/// Derived state rendered by the presentation layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EngineOutput {
    pub message: String,
    pub message_visible: bool,
    pub submit_enabled: bool,
}

impl EngineOutput {
    pub(crate) fn set_message(&mut self, message: String) {
        self.message_visible = !message.is_empty();
        self.message = message;
    }
}

/// Engine phase.
///
/// `on_submit` holds `&mut self` for the whole submission and is back in
/// `Editing` before any listener runs, so callers only ever read `Editing`.
/// `Submitting` shows up in the debug log around the authentication call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// Reacting to field edits
    #[default]
    Editing,
    /// Inside `on_submit`, between taking the snapshot and publishing the result
    Submitting,
}

/// Outcome of one submit action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionResult {
    pub succeeded: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_message_tracks_visibility() {
        let mut output = EngineOutput::default();
        assert!(!output.message_visible);

        output.set_message("Please provide an e-mail.".to_string());
        assert!(output.message_visible);

        output.set_message(String::new());
        assert!(!output.message_visible);
        assert!(output.message.is_empty());
    }

    #[test]
    fn test_input_debug_hides_password() {
        let input = InputState {
            email: "user@example.com".to_string(),
            password: "secret".to_string(),
        };
        let rendered = format!("{input:?}");
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("password_len: 6"));
    }

    #[test]
    fn test_output_serializes_field_names() {
        let output = EngineOutput {
            message: String::new(),
            message_visible: false,
            submit_enabled: true,
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "message": "",
                "message_visible": false,
                "submit_enabled": true,
            })
        );
    }
}

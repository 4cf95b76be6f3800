//! Output records and their rendering.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use crate::form::EngineOutput;

/// How records are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per line
    #[default]
    Json,
    /// Human readable lines
    Text,
}

/// Something the engine published
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Record {
    State(EngineOutput),
    LoginSucceeded,
}

/// Render a record as a single line, without the trailing newline
pub fn render(record: &Record, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(record)?),
        OutputFormat::Text => Ok(render_text(record)),
    }
}

fn render_text(record: &Record) -> String {
    match record {
        Record::State(output) => {
            let message = if output.message_visible {
                format!("{:?}", output.message)
            } else {
                "(hidden)".to_string()
            };
            let submit = if output.submit_enabled {
                "enabled"
            } else {
                "disabled"
            };
            format!("message: {message}  submit: {submit}")
        }
        Record::LoginSucceeded => "login succeeded".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(message: &str, submit_enabled: bool) -> Record {
        Record::State(EngineOutput {
            message: message.to_string(),
            message_visible: !message.is_empty(),
            submit_enabled,
        })
    }

    #[test]
    fn test_json_state_record() {
        let line = render(&state("", true), OutputFormat::Json).unwrap();
        assert_eq!(
            line,
            r#"{"event":"state","message":"","message_visible":false,"submit_enabled":true}"#
        );
    }

    #[test]
    fn test_json_login_record() {
        let line = render(&Record::LoginSucceeded, OutputFormat::Json).unwrap();
        assert_eq!(line, r#"{"event":"login_succeeded"}"#);
    }

    #[test]
    fn test_text_records() {
        assert_eq!(
            render(&state("Please provide an e-mail.", false), OutputFormat::Text).unwrap(),
            "message: \"Please provide an e-mail.\"  submit: disabled"
        );
        assert_eq!(
            render(&state("", true), OutputFormat::Text).unwrap(),
            "message: (hidden)  submit: enabled"
        );
        assert_eq!(
            render(&Record::LoginSucceeded, OutputFormat::Text).unwrap(),
            "login succeeded"
        );
    }
}

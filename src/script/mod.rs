//! Input Script
//!
//! Line-oriented event feed for the presentation shim:
//!
//! ```text
//! # comment
//! email user@example.com
//! password secret
//! submit
//! ```
//!
//! Values are taken verbatim after a single separating space or tab, so
//! inner and trailing whitespace are part of the field value.

pub mod event;

pub use event::{InputEvent, ParsedLine, ScriptError};

/// Parse one line of a script. `line_num` is only used for error reporting.
pub fn parse_line(line_num: usize, line: &str) -> Result<ParsedLine, ScriptError> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        return Ok(ParsedLine::Empty);
    }
    if trimmed.starts_with('#') {
        return Ok(ParsedLine::Comment);
    }

    let (keyword, value) = split_keyword(trimmed);

    let event = match keyword.to_ascii_lowercase().as_str() {
        "email" => InputEvent::EmailChanged(value.unwrap_or_default().to_string()),
        "password" => InputEvent::PasswordChanged(value.unwrap_or_default().to_string()),
        "submit" => {
            if value.is_some_and(|v| !v.trim().is_empty()) {
                return Err(ScriptError::UnexpectedArgument {
                    line: line_num,
                    keyword: keyword.to_string(),
                });
            }
            InputEvent::Submit
        }
        _ => {
            return Err(ScriptError::UnknownKeyword {
                line: line_num,
                keyword: keyword.to_string(),
            });
        }
    };

    Ok(ParsedLine::Event(event))
}

/// Parse a whole script into its events, numbering lines from 1
pub fn parse_script(content: &str) -> Result<Vec<InputEvent>, ScriptError> {
    let mut events = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if let ParsedLine::Event(event) = parse_line(idx + 1, line)? {
            events.push(event);
        }
    }
    Ok(events)
}

/// Split a line into its keyword and the raw value after one separator
fn split_keyword(line: &str) -> (&str, Option<&str>) {
    match line.find([' ', '\t']) {
        Some(idx) => (&line[..idx], Some(&line[idx + 1..])),
        None => (line, None),
    }
}

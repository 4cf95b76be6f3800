//! Validation Rules
//!
//! Derives the guidance message and submit gating from the current field
//! values. Pure functions, no engine state.

use crate::form::InputState;
use crate::validation::email::EmailValidator;

pub const MSG_EMAIL_EMPTY: &str = "Please provide an e-mail.";
pub const MSG_EMAIL_INVALID: &str = "E-mail address is not valid.";
pub const MSG_PASSWORD_EMPTY: &str = "Please provide a password.";

/// Which rule produced the current message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    EmailEmpty,
    EmailInvalid,
    PasswordEmpty,
}

impl Rule {
    pub fn message(self) -> &'static str {
        match self {
            Rule::EmailEmpty => MSG_EMAIL_EMPTY,
            Rule::EmailInvalid => MSG_EMAIL_INVALID,
            Rule::PasswordEmpty => MSG_PASSWORD_EMPTY,
        }
    }
}

/// Result of validating the current input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub message: String,
    pub is_valid: bool,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            message: String::new(),
            is_valid: true,
        }
    }

    pub fn failed(rule: Rule) -> Self {
        Self {
            message: rule.message().to_string(),
            is_valid: false,
        }
    }
}

/// Find the first rule the input violates, in precedence order
pub fn first_violation(input: &InputState, emails: &EmailValidator) -> Option<Rule> {
    if input.email.is_empty() {
        Some(Rule::EmailEmpty)
    } else if !emails.is_valid(&input.email) {
        Some(Rule::EmailInvalid)
    } else if input.password.is_empty() {
        Some(Rule::PasswordEmpty)
    } else {
        None
    }
}

/// Validate the input and produce the message to show
pub fn validate(input: &InputState, emails: &EmailValidator) -> ValidationResult {
    match first_violation(input, emails) {
        Some(rule) => ValidationResult::failed(rule),
        None => ValidationResult::valid(),
    }
}

/// Whether the submit control should be enabled.
///
/// Only emptiness gates submission; a malformed address still enables the
/// button while the message reports the format problem.
pub fn submit_enabled(input: &InputState) -> bool {
    !input.email.is_empty() && !input.password.is_empty()
}

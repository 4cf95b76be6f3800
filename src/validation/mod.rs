//! Validation Engine
//!
//! E-mail matching and the message precedence rules for the login form.

pub mod email;
pub mod engine;

pub use email::{EmailValidator, DEFAULT_EMAIL_PATTERN};
pub use engine::{
    first_violation, submit_enabled, validate, Rule, ValidationResult, MSG_EMAIL_EMPTY,
    MSG_EMAIL_INVALID, MSG_PASSWORD_EMPTY,
};

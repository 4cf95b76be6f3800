//! Login Form Engine
//!
//! Validation and submission logic for a login screen with an e-mail field,
//! a password field, a submit button and a message label.
//!
//! This library provides:
//! - Validation messages and submit gating derived from the field values
//! - A simulated authentication check run on submit
//! - An observable engine that publishes derived state to listeners
//! - A script-driven presentation shim and its configuration

pub mod auth;
pub mod config;
pub mod form;
pub mod script;
pub mod shim;
pub mod validation;

// Re-exports for a flat public API
pub use auth::{AuthError, AuthOutcome, Authenticator, Credentials, StaticAuthenticator};
pub use config::Config;
pub use form::{EngineOutput, FormEngine, InputState, Phase, SubmissionResult, Subscription};
pub use script::{parse_line, parse_script, InputEvent};
pub use validation::{validate, EmailValidator, ValidationResult};

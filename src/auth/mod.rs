//! Authentication
//!
//! The fallible check performed on submit. There is no backend; outcomes
//! are fixed by configuration or supplied by the embedder.

pub mod authenticator;

pub use authenticator::{AuthError, AuthOutcome, Authenticator, Credentials, StaticAuthenticator};

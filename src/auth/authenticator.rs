//! Simulated authentication API.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure returned by an authentication check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// Snapshot of the form fields taken when submit is pressed
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

impl fmt::Debug for Credentials<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A synchronous, single-shot authentication check
pub trait Authenticator {
    fn authenticate(&self, credentials: &Credentials<'_>) -> Result<(), AuthError>;
}

impl<F> Authenticator for F
where
    F: Fn(&Credentials<'_>) -> Result<(), AuthError>,
{
    fn authenticate(&self, credentials: &Credentials<'_>) -> Result<(), AuthError> {
        self(credentials)
    }
}

/// Fixed outcome of the simulated API
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AuthOutcome {
    #[default]
    Succeed,
    Fail,
}

/// Authenticator that answers every request with the same outcome,
/// whatever the credentials are
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticAuthenticator {
    outcome: AuthOutcome,
}

impl StaticAuthenticator {
    pub fn new(outcome: AuthOutcome) -> Self {
        Self { outcome }
    }
}

impl Authenticator for StaticAuthenticator {
    fn authenticate(&self, credentials: &Credentials<'_>) -> Result<(), AuthError> {
        log::debug!(
            "authenticating {:?} with fixed outcome {:?}",
            credentials,
            self.outcome
        );
        match self.outcome {
            AuthOutcome::Succeed => Ok(()),
            AuthOutcome::Fail => Err(AuthError::InvalidCredentials),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY: Credentials<'static> = Credentials {
        email: "",
        password: "",
    };

    #[test]
    fn test_static_authenticator_outcomes() {
        assert_eq!(StaticAuthenticator::default().authenticate(&EMPTY), Ok(()));
        assert_eq!(
            StaticAuthenticator::new(AuthOutcome::Fail).authenticate(&EMPTY),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_closure_authenticator() {
        fn only_alice(c: &Credentials<'_>) -> Result<(), AuthError> {
            if c.email == "alice@example.com" && c.password == "hunter2" {
                Ok(())
            } else {
                Err(AuthError::InvalidCredentials)
            }
        }
        let alice = Credentials {
            email: "alice@example.com",
            password: "hunter2",
        };
        assert!(only_alice.authenticate(&alice).is_ok());
        assert!(only_alice.authenticate(&EMPTY).is_err());
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let creds = Credentials {
            email: "user@example.com",
            password: "secret",
        };
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("user@example.com"));
        assert!(!rendered.contains("secret"));
    }

    #[test]
    fn test_outcome_from_toml_value() {
        #[derive(Deserialize)]
        struct Holder {
            outcome: AuthOutcome,
        }
        let holder: Holder = toml::from_str(r#"outcome = "fail""#).unwrap();
        assert_eq!(holder.outcome, AuthOutcome::Fail);
    }
}

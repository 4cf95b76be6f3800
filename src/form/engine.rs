//! Form Engine
//!
//! Turns field edits and submit taps into derived UI state. Every event is
//! handled to completion, listeners are called synchronously, and the only
//! retained input is the latest value of each field.

use anyhow::{Context, Result};

use crate::auth::{Authenticator, Credentials, StaticAuthenticator};
use crate::config::Config;
use crate::form::observer::{Observers, Subscription};
use crate::form::state::{EngineOutput, InputState, Phase, SubmissionResult};
use crate::validation::{self, EmailValidator, ValidationResult};

/// Message shown when the authentication check rejects the credentials
pub const DEFAULT_FAILURE_MESSAGE: &str = "Login failed. Check your e-mail and password.";

/// Validation and submission state machine for the login form
pub struct FormEngine {
    emails: EmailValidator,
    authenticator: Box<dyn Authenticator>,
    failure_message: String,
    input: InputState,
    output: EngineOutput,
    phase: Phase,
    submissions: u64,
    next_subscription: u64,
    state_listeners: Observers<EngineOutput>,
    login_listeners: Observers<()>,
}

impl std::fmt::Debug for FormEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormEngine")
            .field("input", &self.input)
            .field("output", &self.output)
            .field("phase", &self.phase)
            .field("submissions", &self.submissions)
            .field("state_listeners", &self.state_listeners)
            .field("login_listeners", &self.login_listeners)
            .finish_non_exhaustive()
    }
}

impl Default for FormEngine {
    fn default() -> Self {
        Self::new(EmailValidator::default(), StaticAuthenticator::default())
    }
}

impl FormEngine {
    pub fn new(emails: EmailValidator, authenticator: impl Authenticator + 'static) -> Self {
        Self {
            emails,
            authenticator: Box::new(authenticator),
            failure_message: DEFAULT_FAILURE_MESSAGE.to_string(),
            input: InputState::default(),
            output: EngineOutput::default(),
            phase: Phase::Editing,
            submissions: 0,
            next_subscription: 0,
            state_listeners: Observers::new(),
            login_listeners: Observers::new(),
        }
    }

    /// Build an engine from effective configuration.
    ///
    /// Fails if the configured e-mail pattern does not compile, so that no
    /// event call ever has to deal with it.
    pub fn from_config(config: &Config) -> Result<Self> {
        let emails = EmailValidator::new(&config.email_pattern)
            .with_context(|| format!("Invalid e-mail pattern '{}'", config.email_pattern))?;

        Ok(
            Self::new(emails, StaticAuthenticator::new(config.auth_outcome))
                .with_failure_message(config.failure_message.clone()),
        )
    }

    pub fn with_failure_message(mut self, message: impl Into<String>) -> Self {
        self.failure_message = message.into();
        self
    }

    pub fn on_email_changed(&mut self, text: impl Into<String>) {
        self.input.email = text.into();
        log::debug!("email changed: {:?}", self.input.email);
        self.recompute();
    }

    pub fn on_password_changed(&mut self, text: impl Into<String>) {
        self.input.password = text.into();
        log::debug!("password changed (length {})", self.input.password.len());
        self.recompute();
    }

    /// Authenticate the fields as they are right now.
    ///
    /// Accepted whatever the validation state is, including empty fields.
    /// Publishes exactly one state update, followed by a login notification
    /// when the check succeeded.
    pub fn on_submit(&mut self) -> SubmissionResult {
        self.phase = Phase::Submitting;
        log::debug!("phase -> {:?}", self.phase);

        let credentials = Credentials {
            email: &self.input.email,
            password: &self.input.password,
        };
        let outcome = self.authenticator.authenticate(&credentials);
        self.submissions += 1;

        let succeeded = match outcome {
            Ok(()) => {
                log::info!("login succeeded for {:?}", self.input.email);
                self.output.set_message(String::new());
                true
            }
            Err(e) => {
                log::warn!("login failed for {:?}: {}", self.input.email, e);
                self.output.set_message(self.failure_message.clone());
                false
            }
        };

        self.phase = Phase::Editing;
        log::debug!("phase -> {:?}", self.phase);

        self.state_listeners.notify(&self.output);
        if succeeded {
            self.login_listeners.notify(&());
        }

        SubmissionResult { succeeded }
    }

    /// Register a state listener.
    ///
    /// The listener is called right away with the current output, then after
    /// every event.
    pub fn subscribe(&mut self, listener: impl FnMut(&EngineOutput) + 'static) -> Subscription {
        let subscription = self.allocate_subscription();
        let mut listener = listener;
        listener(&self.output);
        self.state_listeners.add(subscription, Box::new(listener));
        subscription
    }

    /// Register a listener for successful logins. Past logins are not replayed.
    pub fn on_login_succeeded(&mut self, listener: impl FnMut() + 'static) -> Subscription {
        let subscription = self.allocate_subscription();
        let mut listener = listener;
        self.login_listeners
            .add(subscription, Box::new(move |_: &()| listener()));
        subscription
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.state_listeners.remove(subscription) || self.login_listeners.remove(subscription)
    }

    /// Number of registered state and login listeners
    pub fn listener_count(&self) -> usize {
        self.state_listeners.len() + self.login_listeners.len()
    }

    pub fn output(&self) -> &EngineOutput {
        &self.output
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Current phase; always `Editing` between calls
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of completed submissions
    pub fn submissions(&self) -> u64 {
        self.submissions
    }

    /// Validation of the current input, independent of any submit result
    pub fn validation(&self) -> ValidationResult {
        validation::validate(&self.input, &self.emails)
    }

    fn recompute(&mut self) {
        let result = validation::validate(&self.input, &self.emails);
        self.output.set_message(result.message);
        self.output.submit_enabled = validation::submit_enabled(&self.input);
        self.state_listeners.notify(&self.output);
    }

    fn allocate_subscription(&mut self) -> Subscription {
        let subscription = Subscription::new(self.next_subscription);
        self.next_subscription += 1;
        subscription
    }
}

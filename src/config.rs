//! Configuration management for the login form engine.
//!
//! Handles:
//! - Command-line argument parsing
//! - Project, user and explicit TOML config files
//! - Embedded defaults
//!
//! Precedence, highest first: command line, `--config` file, project
//! `.login-form.toml`, user `<config dir>/login-form/config.toml`, embedded
//! defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use crate::auth::AuthOutcome;
use crate::form::DEFAULT_FAILURE_MESSAGE;
use crate::shim::OutputFormat;
use crate::validation::DEFAULT_EMAIL_PATTERN;

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".login-form.toml";

const EMBEDDED_CONFIG: &str = include_str!("../resources/login-form.toml");

/// Command-line arguments for the login form runner
#[derive(Debug, Parser)]
#[command(name = "login-form")]
#[command(about = "Replay login form input events and print the derived UI state")]
#[command(version)]
pub struct Args {
    /// Script of input events; reads stdin when omitted
    #[arg(long, help = "File with one input event per line (email/password/submit)")]
    pub script: Option<PathBuf>,

    /// Outcome of the simulated authentication API
    #[arg(long, value_enum, help = "Result of every login attempt")]
    pub auth_outcome: Option<AuthOutcome>,

    /// Override the e-mail pattern
    #[arg(long, help = "Regular expression an e-mail address must match")]
    pub email_pattern: Option<String>,

    /// Override the message shown when authentication fails
    #[arg(long)]
    pub failure_message: Option<String>,

    /// Output rendering
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Explicit config file, applied over project and user files
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

impl Default for Args {
    /// Same values clap produces when no flag is given
    fn default() -> Self {
        Self {
            script: None,
            auth_outcome: None,
            email_pattern: None,
            failure_message: None,
            format: OutputFormat::Json,
            config: None,
            log_level: "info".to_string(),
        }
    }
}

/// Contents of a TOML config file. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub validation: ValidationSection,
    #[serde(default)]
    pub auth: AuthSection,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ValidationSection {
    pub email_pattern: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AuthSection {
    pub outcome: Option<AuthOutcome>,
    pub failure_message: Option<String>,
}

impl FileConfig {
    /// Load and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Defaults shipped with the crate
    pub fn embedded() -> Self {
        match toml::from_str::<FileConfig>(EMBEDDED_CONFIG) {
            Ok(file) => file,
            Err(e) => {
                log::warn!(
                    "Failed to parse embedded config: {}. Using builtin defaults.",
                    e
                );
                Self::builtin()
            }
        }
    }

    fn builtin() -> Self {
        Self {
            validation: ValidationSection {
                email_pattern: Some(DEFAULT_EMAIL_PATTERN.to_string()),
            },
            auth: AuthSection {
                outcome: Some(AuthOutcome::Succeed),
                failure_message: Some(DEFAULT_FAILURE_MESSAGE.to_string()),
            },
        }
    }
}

/// Where to look for config files
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    pub user_config: Option<PathBuf>,
    pub project_config: Option<PathBuf>,
}

impl ConfigSources {
    /// Standard locations: the user config dir and the working directory
    pub fn discover() -> Self {
        Self {
            user_config: dirs::config_dir().map(|dir| dir.join("login-form").join("config.toml")),
            project_config: std::env::current_dir()
                .ok()
                .map(|dir| dir.join(PROJECT_CONFIG_FILE)),
        }
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub email_pattern: String,
    pub auth_outcome: AuthOutcome,
    pub failure_message: String,
    /// Script path; `None` means stdin
    pub script: Option<PathBuf>,
    pub format: OutputFormat,
    pub log_level: String,
    /// Config files that were applied, lowest precedence first
    pub loaded_files: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let mut config = Self {
            email_pattern: DEFAULT_EMAIL_PATTERN.to_string(),
            auth_outcome: AuthOutcome::Succeed,
            failure_message: DEFAULT_FAILURE_MESSAGE.to_string(),
            script: None,
            format: OutputFormat::Json,
            log_level: "info".to_string(),
            loaded_files: Vec::new(),
        };
        config.apply_file(&FileConfig::embedded());
        config
    }
}

impl Config {
    /// Create configuration from command-line arguments and standard files
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        Self::from_args_with_sources(args, &ConfigSources::discover())
    }

    pub fn from_args_with_sources(args: Args, sources: &ConfigSources) -> Result<Self> {
        let mut config = Config::default();

        // Discovered files are optional; skip the ones that don't exist
        for path in [&sources.user_config, &sources.project_config]
            .into_iter()
            .flatten()
        {
            if path.is_file() {
                config.apply_path(path)?;
            }
        }

        // An explicit file must exist
        if let Some(path) = &args.config {
            config.apply_path(path)?;
        }

        if let Some(pattern) = args.email_pattern {
            config.email_pattern = pattern;
        }
        if let Some(outcome) = args.auth_outcome {
            config.auth_outcome = outcome;
        }
        if let Some(message) = args.failure_message {
            config.failure_message = message;
        }
        config.script = args.script;
        config.format = args.format;
        config.log_level = args.log_level;

        Ok(config)
    }

    /// Whether a project `.login-form.toml` contributed to this config
    pub fn has_project_config(&self) -> bool {
        self.loaded_files
            .iter()
            .any(|path| path.file_name().is_some_and(|name| name == PROJECT_CONFIG_FILE))
    }

    fn apply_path(&mut self, path: &Path) -> Result<()> {
        let file = FileConfig::load(path)?;
        log::debug!("Applying config file {}", path.display());
        self.apply_file(&file);
        self.loaded_files.push(path.to_path_buf());
        Ok(())
    }

    fn apply_file(&mut self, file: &FileConfig) {
        if let Some(pattern) = &file.validation.email_pattern {
            self.email_pattern = pattern.clone();
        }
        if let Some(outcome) = file.auth.outcome {
            self.auth_outcome = outcome;
        }
        if let Some(message) = &file.auth.failure_message {
            self.failure_message = message.clone();
        }
    }
}

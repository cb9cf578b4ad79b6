use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{Config, ValidationMode};
use crate::form::{InitialValues, RuleValidator, ValidationPolicy};

#[derive(Debug, Parser)]
#[command(name = "signup-form", version, about = "Terminal signup form")]
pub struct Cli {
    /// Initial value of the name field
    #[arg(long)]
    pub name: Option<String>,

    /// Initial value of the email field
    #[arg(long)]
    pub email: Option<String>,

    /// Initial value of the password field
    #[arg(long)]
    pub password: Option<String>,

    /// Validation run when a field loses focus (overrides config)
    #[arg(long, value_enum)]
    pub validation: Option<ValidationMode>,

    /// Minimum password length for `rules` validation (overrides config)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub min_password_length: Option<u32>,

    /// Config file (default: <config dir>/signup-form/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Replay JSON-lines events without a terminal
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Print the final form state as JSON after a script run
    #[arg(long, requires = "script")]
    pub dump_state: bool,

    /// Where to write logs in terminal mode
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Config-file values with any flags given on the command line on top.
    pub fn initial_values(&self, config: &Config) -> InitialValues {
        let flags = InitialValues {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        };
        config.initial_values.clone().overlay(flags)
    }

    pub fn validation_mode(&self, config: &Config) -> ValidationMode {
        self.validation.unwrap_or(config.validation.mode)
    }

    /// `--min-password-length` only feeds the `rules` validator.
    pub fn min_password_length_ignored(&self, config: &Config) -> bool {
        self.min_password_length.is_some() && self.validation_mode(config) != ValidationMode::Rules
    }

    pub fn validation_policy(&self, config: &Config) -> ValidationPolicy {
        if self.min_password_length_ignored(config) {
            tracing::warn!(
                min_password_length = ?self.min_password_length,
                "--min-password-length has no effect without rules validation"
            );
        }
        match self.validation_mode(config) {
            ValidationMode::Required => ValidationPolicy::Required,
            ValidationMode::Rules => {
                let min_length = self
                    .min_password_length
                    .map(|len| len as usize)
                    .unwrap_or(config.validation.password_min_length);
                ValidationPolicy::Custom(Arc::new(RuleValidator::new(min_length)))
            }
        }
    }

    pub fn log_file(&self, config: &Config) -> PathBuf {
        self.log_file
            .clone()
            .or_else(|| config.log_file.clone())
            .unwrap_or_else(Config::default_log_path)
    }
}

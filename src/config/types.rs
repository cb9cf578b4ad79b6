use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::form::{InitialValues, DEFAULT_PASSWORD_MIN_LENGTH};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where tracing output goes in TUI mode.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    /// Values the form starts with.
    #[serde(default)]
    pub initial_values: InitialValues,
    #[serde(default)]
    pub validation: ValidationConfig,
}

/// Which validation policy the form runs on blur.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Blank field check only.
    #[default]
    Required,
    /// Built-in rule validator (email shape, password length).
    Rules,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default)]
    pub mode: ValidationMode,
    /// Minimum password length in `rules` mode (default: 8).
    #[serde(default = "default_password_min_length")]
    pub password_min_length: usize,
}

fn default_password_min_length() -> usize {
    DEFAULT_PASSWORD_MIN_LENGTH
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            mode: ValidationMode::default(),
            password_min_length: default_password_min_length(),
        }
    }
}

//! Headless replay of form events.
//!
//! A script is JSON lines, one event per line:
//!
//! ```text
//! {"event":"change","field":"name","value":"Mark"}
//! {"event":"blur","field":"email"}
//! {"event":"submit"}
//! {"event":"dispatch","intent":{"type":"setFieldError","field":"name","error":"x"}}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::form::{Field, FormIntent, SignupForm};

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid event on line {line}: {source}")]
    ParseError {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// One user interaction, or a raw intent for the reducer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum ScriptEvent {
    Change { field: Field, value: String },
    Blur { field: Field },
    Submit,
    Dispatch { intent: FormIntent },
}

pub fn parse_script(text: &str) -> Result<Vec<ScriptEvent>, ScriptError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|source| ScriptError::ParseError {
                line: index + 1,
                source,
            })
        })
        .collect()
}

pub fn load_script(path: &Path) -> Result<Vec<ScriptEvent>, ScriptError> {
    let text = fs::read_to_string(path).map_err(|source| ScriptError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    parse_script(&text)
}

/// Feed `events` to `form` in order, one component event each.
pub fn replay(form: &mut SignupForm, events: impl IntoIterator<Item = ScriptEvent>) {
    for event in events {
        match event {
            ScriptEvent::Change { field, value } => form.change(field, value),
            ScriptEvent::Blur { field } => form.blur(field),
            ScriptEvent::Submit => form.submit(),
            ScriptEvent::Dispatch { intent } => form.dispatch(intent),
        }
    }
}

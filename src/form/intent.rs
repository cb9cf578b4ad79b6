use serde::Deserialize;

use crate::form::field::Field;
use crate::ui::mvi::Intent;

/// State changes the form reducer reacts to.
///
/// Decoded from `{"type": "setFieldValue", ...}` style objects. Any tag that
/// is not recognised decodes to [`FormIntent::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FormIntent {
    /// User edited `field`.
    SetFieldValue { field: Field, value: String },
    /// Validation found `field` invalid.
    SetFieldError { field: Field, error: String },
    #[serde(other)]
    Unknown,
}

impl Intent for FormIntent {}

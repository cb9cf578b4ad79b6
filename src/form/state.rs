use serde::Serialize;

use crate::form::field::{Field, FieldErrors, FormValues, InitialValues};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FormState {
    pub values: FormValues,
    /// Only fields that failed validation appear. `None` until the first error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl UiState for FormState {}

impl FormState {
    pub fn new(initial: &InitialValues) -> Self {
        Self {
            values: FormValues::with_defaults(initial),
            errors: None,
        }
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors
            .as_ref()
            .and_then(|errors| errors.get(&field))
            .map(String::as_str)
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.error(field).is_some()
    }
}

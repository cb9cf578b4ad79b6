//! Framework-independent form component.
//!
//! `SignupForm` owns one [`FormState`] for its whole lifetime and turns
//! change / blur / submit events into [`FormIntent`]s for [`FormReducer`].
//! Views only read from it.

use std::fmt;
use std::sync::Arc;

use crate::form::field::{Field, FormValues, InitialValues};
use crate::form::intent::FormIntent;
use crate::form::reducer::FormReducer;
use crate::form::state::FormState;
use crate::form::validation::{ValidationPolicy, Validator};
use crate::ui::mvi::Reducer;

/// Callback receiving the held values on submit.
pub type SubmitHandler = Box<dyn FnMut(FormValues)>;

/// Construction parameters for [`SignupForm`].
pub struct FormProps {
    on_submit: SubmitHandler,
    initial_values: InitialValues,
    validation: ValidationPolicy,
}

impl FormProps {
    pub fn new(on_submit: impl FnMut(FormValues) + 'static) -> Self {
        Self {
            on_submit: Box::new(on_submit),
            initial_values: InitialValues::default(),
            validation: ValidationPolicy::Required,
        }
    }

    pub fn initial_values(mut self, initial_values: InitialValues) -> Self {
        self.initial_values = initial_values;
        self
    }

    /// Replaces the built-in required check with `validator`.
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validation = ValidationPolicy::Custom(Arc::new(validator));
        self
    }

    pub fn validation(mut self, validation: ValidationPolicy) -> Self {
        self.validation = validation;
        self
    }
}

pub struct SignupForm {
    state: FormState,
    validation: ValidationPolicy,
    on_submit: SubmitHandler,
}

impl fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupForm")
            .field("state", &self.state)
            .field("validation", &self.validation)
            .finish_non_exhaustive()
    }
}

impl SignupForm {
    pub fn new(props: FormProps) -> Self {
        let state = FormState::new(&props.initial_values);
        tracing::debug!(policy = ?props.validation, "form mounted");
        Self {
            state,
            validation: props.validation,
            on_submit: props.on_submit,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn values(&self) -> &FormValues {
        &self.state.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.state.values.get(field)
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.state.error(field)
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.state.has_error(field)
    }

    pub fn validation_name(&self) -> &'static str {
        self.validation.name()
    }

    /// Run an intent through the reducer and keep the result.
    pub fn dispatch(&mut self, intent: FormIntent) {
        tracing::debug!(?intent, "dispatch");
        self.state = FormReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    /// The user replaced the content of `field` with `value`.
    pub fn change(&mut self, field: Field, value: impl Into<String>) {
        self.dispatch(FormIntent::SetFieldValue {
            field,
            value: value.into(),
        });
    }

    /// `field` lost focus: run the active validation policy against it.
    pub fn blur(&mut self, field: Field) {
        if let Some(error) = self.validation.check(field, &self.state.values) {
            self.dispatch(FormIntent::SetFieldError { field, error });
        }
    }

    /// Hand the held values to the submit callback.
    ///
    /// Pending field errors do not block submission.
    pub fn submit(&mut self) {
        let values = self.state.values.clone();
        tracing::info!(
            pending_errors = self.state.errors.as_ref().map_or(0, |e| e.len()),
            "form submitted"
        );
        (self.on_submit)(values);
    }
}

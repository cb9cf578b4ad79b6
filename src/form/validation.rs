//! Field validation run when a field loses focus.
//!
//! Two policies exist and exactly one is active per form:
//!
//! - [`ValidationPolicy::Required`] checks that the blurred field is not blank.
//! - [`ValidationPolicy::Custom`] delegates to a caller-supplied [`Validator`].

use std::fmt;
use std::sync::Arc;

use crate::form::field::{Field, FieldErrors, FormValues};

/// Default minimum password length used by [`RuleValidator`].
pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = 8;

/// Computes field-level error messages from the current values.
pub trait Validator: Send + Sync {
    fn validate(&self, values: &FormValues) -> FieldErrors;
}

impl<F> Validator for F
where
    F: Fn(&FormValues) -> FieldErrors + Send + Sync,
{
    fn validate(&self, values: &FormValues) -> FieldErrors {
        self(values)
    }
}

/// The validation strategy a form runs on blur.
#[derive(Clone, Default)]
pub enum ValidationPolicy {
    #[default]
    Required,
    Custom(Arc<dyn Validator>),
}

impl fmt::Debug for ValidationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ValidationPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            ValidationPolicy::Required => "required",
            ValidationPolicy::Custom(_) => "custom",
        }
    }

    /// Error to record for `field` after it lost focus, if any.
    pub fn check(&self, field: Field, values: &FormValues) -> Option<String> {
        match self {
            ValidationPolicy::Required => {
                if values.get(field).trim().is_empty() {
                    Some(required_message(field))
                } else {
                    None
                }
            }
            ValidationPolicy::Custom(validator) => validator
                .validate(values)
                .remove(&field)
                .filter(|error| !error.is_empty()),
        }
    }
}

pub fn required_message(field: Field) -> String {
    format!("{} is required", field)
}

/// Example rule set: name present, email shaped like `local@domain`,
/// password of a minimum length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleValidator {
    pub password_min_length: usize,
}

impl Default for RuleValidator {
    fn default() -> Self {
        Self {
            password_min_length: DEFAULT_PASSWORD_MIN_LENGTH,
        }
    }
}

impl RuleValidator {
    pub fn new(password_min_length: usize) -> Self {
        Self {
            password_min_length,
        }
    }
}

impl Validator for RuleValidator {
    fn validate(&self, values: &FormValues) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if values.name.trim().is_empty() {
            errors.insert(Field::Name, required_message(Field::Name));
        }

        let email = values.email.trim();
        if email.is_empty() {
            errors.insert(Field::Email, required_message(Field::Email));
        } else if !looks_like_email(email) {
            errors.insert(Field::Email, "email must look like name@example.com".to_string());
        }

        if values.password.chars().count() < self.password_min_length {
            errors.insert(
                Field::Password,
                format!(
                    "password must be at least {} characters",
                    self.password_min_length
                ),
            );
        }

        errors
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_flags_blank_field() {
        let values = FormValues::new("   ", "", "");
        assert_eq!(
            ValidationPolicy::Required.check(Field::Name, &values),
            Some("name is required".to_string())
        );
    }

    #[test]
    fn required_accepts_filled_field() {
        let values = FormValues::new("Mark", "", "");
        assert_eq!(ValidationPolicy::Required.check(Field::Name, &values), None);
    }

    #[test]
    fn custom_only_reports_requested_field() {
        let policy = ValidationPolicy::Custom(Arc::new(|_: &FormValues| {
            let mut errors = FieldErrors::new();
            errors.insert(Field::Password, "too short".to_string());
            errors
        }));
        let values = FormValues::default();
        assert_eq!(policy.check(Field::Name, &values), None);
        assert_eq!(
            policy.check(Field::Password, &values),
            Some("too short".to_string())
        );
    }

    #[test]
    fn custom_empty_message_is_not_an_error() {
        let policy = ValidationPolicy::Custom(Arc::new(|_: &FormValues| {
            let mut errors = FieldErrors::new();
            errors.insert(Field::Name, String::new());
            errors
        }));
        assert_eq!(policy.check(Field::Name, &FormValues::default()), None);
    }

    #[test]
    fn rules_check_password_length() {
        let rules = RuleValidator::new(8);
        let errors = rules.validate(&FormValues::new("Mark", "mark@email.com", "short"));
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(&Field::Password).map(String::as_str),
            Some("password must be at least 8 characters")
        );

        let errors = rules.validate(&FormValues::new("Mark", "mark@email.com", "Password1"));
        assert!(errors.is_empty());
    }

    #[test]
    fn rules_check_email_shape() {
        let rules = RuleValidator::default();
        for bad in ["mark", "@email.com", "mark@", "ma rk@email.com", "a@b@c"] {
            let errors = rules.validate(&FormValues::new("Mark", bad, "Password1"));
            assert!(errors.contains_key(&Field::Email), "accepted {bad:?}");
        }
    }
}

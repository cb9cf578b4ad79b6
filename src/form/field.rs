use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One of the three inputs of the signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Password,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Password];

    /// Lowercase identifier, used in messages and serialized data.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
        }
    }

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Password => "Password",
        }
    }

    /// Whether the rendered value must be masked.
    pub fn is_secret(self) -> bool {
        matches!(self, Field::Password)
    }

    pub fn next(self) -> Option<Field> {
        match self {
            Field::Name => Some(Field::Email),
            Field::Email => Some(Field::Password),
            Field::Password => None,
        }
    }

    pub fn prev(self) -> Option<Field> {
        match self {
            Field::Name => None,
            Field::Email => Some(Field::Name),
            Field::Password => Some(Field::Email),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current value of every field. All three are always present.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl FormValues {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Defaults (all empty) with `initial` merged on top.
    pub fn with_defaults(initial: &InitialValues) -> Self {
        let mut values = Self::default();
        for field in Field::ALL {
            if let Some(value) = initial.get(field) {
                values.set(field, value.to_string());
            }
        }
        values
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
    }
}

/// Partial seed for [`FormValues`]; absent fields fall back to empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialValues {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl InitialValues {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Password => self.password.as_deref(),
        }
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        };
        *slot = Some(value.into());
        self
    }

    /// Fields set in `other` win over fields set in `self`.
    pub fn overlay(self, other: InitialValues) -> Self {
        Self {
            name: other.name.or(self.name),
            email: other.email.or(self.email),
            password: other.password.or(self.password),
        }
    }
}

/// Sparse mapping of field to error message.
pub type FieldErrors = BTreeMap<Field, String>;

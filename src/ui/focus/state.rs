use crate::form::Field;
use crate::ui::mvi::UiState;

/// Which control receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusState {
    Field(Field),
    Submit,
}

impl Default for FocusState {
    fn default() -> Self {
        Self::Field(Field::Name)
    }
}

impl UiState for FocusState {}

impl FocusState {
    pub fn field(self) -> Option<Field> {
        match self {
            Self::Field(field) => Some(field),
            Self::Submit => None,
        }
    }
}

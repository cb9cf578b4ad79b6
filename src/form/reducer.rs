use crate::form::intent::FormIntent;
use crate::form::state::FormState;
use crate::ui::mvi::Reducer;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::SetFieldValue { field, value } => {
                let mut values = state.values;
                values.set(field, value);
                FormState { values, ..state }
            }
            FormIntent::SetFieldError { field, error } => {
                let mut errors = state.errors.unwrap_or_default();
                errors.insert(field, error);
                FormState {
                    errors: Some(errors),
                    ..state
                }
            }
            FormIntent::Unknown => state,
        }
    }
}

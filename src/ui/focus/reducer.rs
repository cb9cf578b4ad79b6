use crate::form::Field;
use crate::ui::focus::intent::FocusIntent;
use crate::ui::focus::state::FocusState;
use crate::ui::mvi::Reducer;

/// Cycles focus through the fields and the submit control, wrapping at both ends.
pub struct FocusReducer;

impl Reducer for FocusReducer {
    type State = FocusState;
    type Intent = FocusIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FocusIntent::Next => match state {
                FocusState::Field(field) => {
                    field.next().map_or(FocusState::Submit, FocusState::Field)
                }
                FocusState::Submit => FocusState::Field(Field::Name),
            },
            FocusIntent::Prev => match state {
                FocusState::Field(field) => {
                    field.prev().map_or(FocusState::Submit, FocusState::Field)
                }
                FocusState::Submit => FocusState::Field(Field::Password),
            },
        }
    }
}

use super::intent::Intent;
use super::state::UiState;

/// Computes the next state from the current one and an intent.
///
/// Implementations are pure and total: no I/O, no panics, unknown
/// intents yield the input state.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

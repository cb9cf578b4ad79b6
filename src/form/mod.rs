//! The signup form: values, intents, reducer, validation and the component
//! that ties them together.

mod component;
mod field;
mod intent;
mod reducer;
mod state;
mod validation;

pub use component::{FormProps, SignupForm, SubmitHandler};
pub use field::{Field, FieldErrors, FormValues, InitialValues};
pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::FormState;
pub use validation::{
    required_message, RuleValidator, ValidationPolicy, Validator, DEFAULT_PASSWORD_MIN_LENGTH,
};

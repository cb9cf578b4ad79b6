use crate::form::{Field, SignupForm};
use crate::ui::focus::{FocusIntent, FocusReducer, FocusState};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Terminal application state: the mounted form plus view-only concerns.
pub struct App {
    should_quit: bool,
    form: SignupForm,
    /// Keyboard focus (MVI pattern).
    focus: FocusState,
    submit_count: usize,
    /// Errors pending when the last submission went out.
    submit_errors: usize,
}

impl App {
    pub fn new(form: SignupForm) -> Self {
        Self {
            should_quit: false,
            form,
            focus: FocusState::default(),
            submit_count: 0,
            submit_errors: 0,
        }
    }

    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    /// Unmount: hand the form back to the caller.
    pub fn into_form(self) -> SignupForm {
        self.form
    }

    pub fn focus(&self) -> FocusState {
        self.focus
    }

    pub fn submit_count(&self) -> usize {
        self.submit_count
    }

    pub fn submit_errors(&self) -> usize {
        self.submit_errors
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Move focus forward. Leaving a field blurs it.
    pub fn focus_next(&mut self) {
        self.move_focus(FocusIntent::Next);
    }

    /// Move focus backward. Leaving a field blurs it.
    pub fn focus_prev(&mut self) {
        self.move_focus(FocusIntent::Prev);
    }

    /// Append a typed character to the focused field.
    pub fn insert_char(&mut self, ch: char) {
        let Some(field) = self.focus.field() else {
            return;
        };
        let mut value = self.form.value(field).to_string();
        value.push(ch);
        self.form.change(field, value);
    }

    /// Delete the last character of the focused field.
    pub fn delete_char(&mut self) {
        let Some(field) = self.focus.field() else {
            return;
        };
        let mut value = self.form.value(field).to_string();
        if value.pop().is_some() {
            self.form.change(field, value);
        }
    }

    pub fn submit(&mut self) {
        self.form.submit();
        self.submit_count += 1;
        self.submit_errors = self.error_count();
    }

    /// Enter submits on the submit control and advances focus on a field.
    pub fn activate(&mut self) {
        match self.focus {
            FocusState::Submit => self.submit(),
            FocusState::Field(_) => self.focus_next(),
        }
    }

    /// Number of fields currently showing an error.
    pub fn error_count(&self) -> usize {
        Field::ALL
            .iter()
            .filter(|field| self.form.has_error(**field))
            .count()
    }

    fn move_focus(&mut self, intent: FocusIntent) {
        let left = self.focus.field();
        dispatch_mvi!(self, focus, FocusReducer, intent);
        if let Some(field) = left {
            self.form.blur(field);
        }
    }
}

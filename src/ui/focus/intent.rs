use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusIntent {
    /// Tab / Down / Enter on a field.
    Next,
    /// Shift+Tab / Up.
    Prev,
}

impl Intent for FocusIntent {}

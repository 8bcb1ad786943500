//! Application state definitions

use super::forms::SignupForm;
use std::collections::VecDeque;

/// Top-level UI state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The sign-up form and its last submission outcome
    pub form: SignupForm,
    /// Show the password field in clear text
    pub reveal_password: bool,
    /// Pending modal error messages, oldest first
    errors: VecDeque<String>,
}

impl AppState {
    pub fn new(reveal_password: bool) -> Self {
        Self {
            reveal_password,
            ..Self::default()
        }
    }

    /// Queue an error message for the modal dialog
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The error currently shown, if any
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    /// Dismiss the error currently shown
    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}

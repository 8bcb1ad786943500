//! Sign-up form controller
//!
//! Holds the raw value of every input, runs the schema on explicit submission
//! and keeps the outcome around for rendering: either the pretty-printed
//! normalized data or the errors of the fields that failed.

use super::field::FormField;
use super::schema::{self, FieldErrors, FieldName, FormInput, NormalizedData};

/// Index of the submit button row
pub const SUBMIT_ROW: usize = 4;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    /// Last submission was accepted
    Accepted,
    /// Last submission was rejected with field errors
    Rejected,
}

/// Result of a single submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(NormalizedData),
    Rejected(FieldErrors),
}

#[derive(Debug, Clone)]
pub struct SignupForm {
    pub name: FormField,
    pub email: FormField,
    pub password: FormField,
    pub image: FormField,
    pub active_field_index: usize,
    errors: FieldErrors,
    output: Option<String>,
    phase: SubmitPhase,
}

impl SignupForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text(FieldName::Name, "Name"),
            email: FormField::text(FieldName::Email, "Email"),
            password: FormField::masked(FieldName::Password, "Password"),
            image: FormField::file("Image"),
            active_field_index: 0,
            errors: FieldErrors::new(),
            output: None,
            phase: SubmitPhase::Idle,
        }
    }

    fn field_mut(&mut self, field: FieldName) -> &mut FormField {
        match field {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Password => &mut self.password,
        }
    }

    /// Store the latest raw value of a field. Does not validate.
    pub fn on_field_change(&mut self, field: FieldName, raw: impl Into<String>) {
        self.field_mut(field).set_text(raw.into());
        self.phase = SubmitPhase::Idle;
    }

    /// Replace the selected image path
    pub fn set_image_path(&mut self, path: impl Into<String>) {
        self.image.set_text(path.into());
        self.phase = SubmitPhase::Idle;
    }

    /// Snapshot of the current raw values
    pub fn input(&self) -> FormInput {
        FormInput {
            name: self.name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            password: self.password.as_text().to_string(),
        }
    }

    /// Validate the current values.
    ///
    /// Errors are replaced wholesale on every attempt, so a field that became
    /// valid never keeps its old message. The previous output survives a
    /// rejected attempt.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        match schema::validate(&self.input()) {
            Ok(data) => {
                self.errors = FieldErrors::new();
                match serde_json::to_string_pretty(&data) {
                    Ok(rendered) => self.output = Some(rendered),
                    Err(err) => tracing::error!("Failed to render submitted data: {err}"),
                }
                self.phase = SubmitPhase::Accepted;
                SubmitOutcome::Accepted(data)
            }
            Err(errors) => {
                self.errors = errors.clone();
                self.phase = SubmitPhase::Rejected;
                SubmitOutcome::Rejected(errors)
            }
        }
    }

    pub fn error_for(&self, field: FieldName) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Indented rendering of the last accepted submission
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Returns true if the submit button row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    /// Returns true if the image path field is currently active
    pub fn is_image_field_active(&self) -> bool {
        self.active_field_index == 3
    }

    /// Edit the active field's value and record it as a field change
    fn edit_active(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(field) = self.get_active_field_mut() else {
            return;
        };
        let key = field.key;
        let mut value = field.as_text().to_string();
        edit(&mut value);
        match key {
            Some(name) => self.on_field_change(name, value),
            None => self.set_image_path(value),
        }
    }

    /// Type a character into the active field
    pub fn input_char(&mut self, c: char) {
        self.edit_active(|value| value.push(c));
    }

    /// Delete the last character of the active field
    pub fn backspace(&mut self) {
        self.edit_active(|value| {
            value.pop();
        });
    }

    /// Empty the active field
    pub fn clear_active_field(&mut self) {
        self.edit_active(String::clear);
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignupForm {
    fn field_count(&self) -> usize {
        5 // name, email, password, image, submit
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.password),
            3 => Some(&mut self.image),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.password),
            3 => Some(&self.image),
            // Index 4 is the submit row, no FormField for it
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::schema::{EMAIL_INVALID, NAME_REQUIRED, PASSWORD_TOO_SHORT};

    fn filled(name: &str, email: &str, password: &str) -> SignupForm {
        let mut form = SignupForm::new();
        form.on_field_change(FieldName::Name, name);
        form.on_field_change(FieldName::Email, email);
        form.on_field_change(FieldName::Password, password);
        form
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_field_change_does_not_validate() {
            let mut form = SignupForm::new();
            form.on_field_change(FieldName::Email, "bad");
            assert!(form.errors().is_empty());
            assert_eq!(form.phase(), SubmitPhase::Idle);
        }

        #[test]
        fn test_accepted_submission_renders_output() {
            let mut form = filled("joão silva ", "JOAO@Example.COM", "123456");
            let outcome = form.on_submit();

            assert!(matches!(outcome, SubmitOutcome::Accepted(_)));
            assert_eq!(form.phase(), SubmitPhase::Accepted);
            assert!(form.errors().is_empty());
            assert_eq!(
                form.output(),
                Some(
                    "{\n  \"name\": \"João Silva\",\n  \"email\": \"joao@example.com\",\n  \"password\": \"123456\"\n}"
                )
            );
        }

        #[test]
        fn test_rejected_submission_stores_errors() {
            let mut form = filled("", "x@y.com", "123456");
            let outcome = form.on_submit();

            match outcome {
                SubmitOutcome::Rejected(errors) => assert_eq!(errors.len(), 1),
                other => panic!("expected rejection, got {other:?}"),
            }
            assert_eq!(form.error_for(FieldName::Name), Some(NAME_REQUIRED));
            assert_eq!(form.error_for(FieldName::Email), None);
            assert_eq!(form.phase(), SubmitPhase::Rejected);
            assert!(form.output().is_none());
        }

        #[test]
        fn test_resubmission_drops_fixed_field_errors() {
            let mut form = filled("Ana", "not-an-email", "12345");
            form.on_submit();
            assert_eq!(form.error_for(FieldName::Email), Some(EMAIL_INVALID));
            assert_eq!(form.error_for(FieldName::Password), Some(PASSWORD_TOO_SHORT));

            form.on_field_change(FieldName::Email, "ana@example.com");
            form.on_submit();
            assert_eq!(form.error_for(FieldName::Email), None);
            assert_eq!(form.error_for(FieldName::Password), Some(PASSWORD_TOO_SHORT));
            assert_eq!(form.errors().len(), 1);
        }

        #[test]
        fn test_success_after_failure_clears_everything() {
            let mut form = filled("", "", "");
            form.on_submit();
            assert_eq!(form.errors().len(), 3);

            form.on_field_change(FieldName::Name, "ana");
            form.on_field_change(FieldName::Email, "ana@example.com");
            form.on_field_change(FieldName::Password, "abcdef");
            form.on_submit();
            assert!(form.errors().is_empty());
            assert!(form.output().is_some());
        }

        #[test]
        fn test_rejection_keeps_previous_output() {
            let mut form = filled("ana", "ana@example.com", "abcdef");
            form.on_submit();
            let previous = form.output().map(str::to_string);

            form.on_field_change(FieldName::Password, "abc");
            form.on_submit();
            assert_eq!(form.output().map(str::to_string), previous);
        }

        #[test]
        fn test_values_survive_submission() {
            let mut form = filled("ana", "ANA@example.com", "abcdef");
            form.on_submit();
            assert_eq!(form.email.as_text(), "ANA@example.com");
        }

        #[test]
        fn test_edit_returns_to_idle() {
            let mut form = filled("ana", "ana@example.com", "abcdef");
            form.on_submit();
            form.input_char('x');
            assert_eq!(form.phase(), SubmitPhase::Idle);
        }

        #[test]
        fn test_image_does_not_affect_validation() {
            let mut form = filled("ana", "ana@example.com", "abcdef");
            form.set_image_path("/does/not/exist.png");
            assert!(matches!(form.on_submit(), SubmitOutcome::Accepted(_)));
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = SignupForm::new();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.field_count(), 5);
            assert!(form.password.is_masked());
            assert!(form.image.key.is_none());
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = SignupForm::new();
            for _ in 0..5 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_submit() {
            let mut form = SignupForm::new();
            form.prev_field();
            assert!(form.is_submit_row_active());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = SignupForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, SUBMIT_ROW);
        }

        #[test]
        fn test_get_field_returns_correct_fields() {
            let form = SignupForm::new();
            assert_eq!(form.get_field(0).unwrap().key, Some(FieldName::Name));
            assert_eq!(form.get_field(1).unwrap().key, Some(FieldName::Email));
            assert_eq!(form.get_field(2).unwrap().key, Some(FieldName::Password));
            assert_eq!(form.get_field(3).unwrap().label, "Image");
            assert!(form.get_field(4).is_none());
        }

        #[test]
        fn test_typing_targets_active_field() {
            let mut form = SignupForm::new();
            form.set_active_field(1);
            form.input_char('a');
            form.input_char('b');
            form.backspace();
            assert_eq!(form.email.as_text(), "a");
            assert_eq!(form.name.as_text(), "");
        }

        #[test]
        fn test_typing_on_submit_row_is_noop() {
            let mut form = SignupForm::new();
            form.set_active_field(SUBMIT_ROW);
            form.input_char('a');
            assert_eq!(form.input(), FormInput::default());
        }

        #[test]
        fn test_clear_active_field() {
            let mut form = SignupForm::new();
            form.set_active_field(3);
            form.set_image_path("cat.png");
            form.clear_active_field();
            assert_eq!(form.image.as_text(), "");
        }

        #[test]
        fn test_keystrokes_match_field_change() {
            let mut typed = SignupForm::new();
            typed.set_active_field(2);
            for c in "secretx".chars() {
                typed.input_char(c);
            }
            typed.backspace();

            let mut changed = SignupForm::new();
            changed.on_field_change(FieldName::Password, "secret");

            assert_eq!(typed.input(), changed.input());
        }

        #[test]
        fn test_backspace_on_empty_field_is_noop() {
            let mut form = SignupForm::new();
            form.backspace();
            assert_eq!(form.name.as_text(), "");
            assert_eq!(form.phase(), SubmitPhase::Idle);
        }

        #[test]
        fn test_keystroke_after_rejection_returns_to_idle() {
            let mut form = SignupForm::new();
            form.on_submit();
            assert_eq!(form.phase(), SubmitPhase::Rejected);
            form.backspace();
            assert_eq!(form.phase(), SubmitPhase::Idle);
        }
    }
}

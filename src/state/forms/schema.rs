//! Declarative validation rules for the sign-up form
//!
//! Each field is described by a [`FieldRule`]: an ordered list of checks and a
//! transform that only runs once every check has passed. Fields are validated
//! independently, so one failing field never hides the errors of another.

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// Minimum password length, counted in characters
pub const MIN_PASSWORD_LEN: usize = 6;

pub const NAME_REQUIRED: &str = "Name required";
pub const EMAIL_REQUIRED: &str = "Email required";
pub const EMAIL_INVALID: &str = "Invalid email format";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";

/// Local part and domain shape accepted for email addresses.
/// Leading dots and doubled dots are rejected separately in [`is_valid_email`].
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@(?:[A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Names of the validated fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Email,
    Password,
}

impl FieldName {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw, untrimmed field values as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Validated and transformed form values
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedData {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A single failed field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldValidationError {
    pub field: FieldName,
    pub message: &'static str,
}

/// Sparse mapping from failing field to its message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FieldName, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, error: FieldValidationError) {
        self.0.insert(error.field, error.message.to_string());
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl FromIterator<FieldValidationError> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = FieldValidationError>>(iter: I) -> Self {
        let mut errors = Self::new();
        for error in iter {
            errors.insert(error);
        }
        errors
    }
}

/// A predicate paired with the message reported when it fails
pub struct Check {
    pub message: &'static str,
    pub predicate: fn(&str) -> bool,
}

/// Ordered checks plus the normalization applied once they all pass
pub struct FieldRule {
    pub field: FieldName,
    pub checks: &'static [Check],
    pub transform: fn(&str) -> String,
}

impl FieldRule {
    /// Run the checks in order; the first failure wins
    pub fn apply(&self, raw: &str) -> Result<String, FieldValidationError> {
        if let Some(failed) = self.checks.iter().find(|check| !(check.predicate)(raw)) {
            return Err(FieldValidationError {
                field: self.field,
                message: failed.message,
            });
        }
        Ok((self.transform)(raw))
    }
}

pub static NAME_RULE: FieldRule = FieldRule {
    field: FieldName::Name,
    checks: &[Check {
        message: NAME_REQUIRED,
        predicate: is_not_blank,
    }],
    transform: capitalize_words,
};

pub static EMAIL_RULE: FieldRule = FieldRule {
    field: FieldName::Email,
    checks: &[
        Check {
            message: EMAIL_REQUIRED,
            predicate: is_not_empty,
        },
        Check {
            message: EMAIL_INVALID,
            predicate: is_valid_email,
        },
    ],
    transform: str::to_lowercase,
};

pub static PASSWORD_RULE: FieldRule = FieldRule {
    field: FieldName::Password,
    checks: &[Check {
        message: PASSWORD_TOO_SHORT,
        predicate: has_min_password_len,
    }],
    transform: str::to_string,
};

/// Validate every field and either produce normalized data or the full set of
/// field errors. There is no partial success.
pub fn validate(input: &FormInput) -> Result<NormalizedData, FieldErrors> {
    let name = NAME_RULE.apply(&input.name);
    let email = EMAIL_RULE.apply(&input.email);
    let password = PASSWORD_RULE.apply(&input.password);

    match (name, email, password) {
        (Ok(name), Ok(email), Ok(password)) => Ok(NormalizedData {
            name,
            email,
            password,
        }),
        (name, email, password) => Err([name.err(), email.err(), password.err()]
            .into_iter()
            .flatten()
            .collect()),
    }
}

/// Uppercase the first character of every whitespace-separated word and join
/// the words with single spaces. Runs of whitespace never produce empty words.
pub fn capitalize_words(value: &str) -> String {
    value
        .split_whitespace()
        .map(capitalize)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn is_valid_email(value: &str) -> bool {
    if value.starts_with('.') || value.contains("..") {
        return false;
    }
    EMAIL_PATTERN.is_match(value)
}

fn is_not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

fn is_not_empty(value: &str) -> bool {
    !value.is_empty()
}

fn has_min_password_len(value: &str) -> bool {
    value.chars().count() >= MIN_PASSWORD_LEN
}

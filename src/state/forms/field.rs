//! Form field value objects

use super::schema::FieldName;

/// Mask character used for hidden password input
pub const MASK_CHAR: char = '•';

/// How a field is entered and displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    /// Hidden unless the user reveals it
    Masked,
    /// A path to a file on disk
    File,
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    /// Validated field this input feeds, if any
    pub key: Option<FieldName>,
    pub label: String,
    pub value: String,
    pub kind: FieldKind,
}

impl FormField {
    /// Create a new plain text field
    pub fn text(key: FieldName, label: &str) -> Self {
        Self {
            key: Some(key),
            label: label.to_string(),
            value: String::new(),
            kind: FieldKind::Text,
        }
    }

    /// Create a new masked field
    pub fn masked(key: FieldName, label: &str) -> Self {
        Self {
            kind: FieldKind::Masked,
            ..Self::text(key, label)
        }
    }

    /// Create a new file path field (not validated)
    pub fn file(label: &str) -> Self {
        Self {
            key: None,
            label: label.to_string(),
            value: String::new(),
            kind: FieldKind::File,
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    pub fn is_masked(&self) -> bool {
        self.kind == FieldKind::Masked
    }

    /// Get the display value for rendering
    pub fn display_value(&self, reveal: bool) -> String {
        if self.is_masked() && !reveal {
            MASK_CHAR.to_string().repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_defaults() {
        let field = FormField::text(FieldName::Name, "Name");
        assert_eq!(field.key, Some(FieldName::Name));
        assert_eq!(field.label, "Name");
        assert_eq!(field.as_text(), "");
        assert_eq!(field.kind, FieldKind::Text);
    }

    #[test]
    fn test_file_field_has_no_key() {
        let field = FormField::file("Image");
        assert!(field.key.is_none());
        assert_eq!(field.kind, FieldKind::File);
    }

    #[test]
    fn test_masked_display_hides_characters() {
        let mut field = FormField::masked(FieldName::Password, "Password");
        field.set_text("sécret".to_string());
        assert_eq!(field.display_value(false), "••••••");
        assert_eq!(field.display_value(true), "sécret");
    }

    #[test]
    fn test_text_display_ignores_reveal() {
        let mut field = FormField::text(FieldName::Name, "Name");
        field.set_text("Ana".to_string());
        assert_eq!(field.display_value(false), "Ana");
    }
}

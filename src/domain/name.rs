//! Contact name field.

use super::errors::ValidationError;
use super::field::{Field, FieldKind};

/// Validation rule for [`Name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameKind {}

/// A contact name. Any non-empty text, stored verbatim.
pub type Name = Field<NameKind>;

impl FieldKind for NameKind {
    type Value = String;

    fn parse(raw: &str) -> Result<String, ValidationError> {
        if raw.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(raw.to_string())
    }

    fn render(value: &String) -> String {
        value.clone()
    }
}

impl Field<NameKind> {
    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        self.value()
    }
}

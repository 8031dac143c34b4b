//! Phone number field.

use super::errors::ValidationError;
use super::field::{Field, FieldKind};

/// Number of digits in a phone number.
pub const PHONE_LENGTH: usize = 10;

/// Validation rule for [`Phone`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneKind {}

/// A phone number of exactly ten ASCII digits.
///
/// # Example
///
/// ```
/// use address_book::domain::Phone;
///
/// let phone = Phone::new("0501234567").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// assert!(Phone::new("+380501234567").is_err());
/// ```
pub type Phone = Field<PhoneKind>;

impl FieldKind for PhoneKind {
    type Value = String;

    /// # Validation Rules
    ///
    /// - Exactly ten characters
    /// - Every character is `0`-`9` (formatting such as `+`, `-` or spaces is rejected)
    fn parse(raw: &str) -> Result<String, ValidationError> {
        if raw.len() != PHONE_LENGTH || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidPhone(raw.to_string()));
        }
        Ok(raw.to_string())
    }

    fn render(value: &String) -> String {
        value.clone()
    }
}

impl Field<PhoneKind> {
    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        self.value()
    }
}

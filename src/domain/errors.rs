//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten ASCII digits.
    InvalidPhone(String),

    /// The provided birthday is not a `YYYY.MM.DD` calendar date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidPhone(phone) => write!(
                f,
                "The phone number should be digits only and have 10 symbols, got: {}",
                phone
            ),
            Self::InvalidBirthday(birthday) => write!(
                f,
                "The birthday date must be in format: YYYY.MM.DD (e.g. 2022.01.01), got: {}",
                birthday
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

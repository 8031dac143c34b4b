//! Birthday field.

use super::errors::ValidationError;
use super::field::{Field, FieldKind};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Text layout accepted for birthdays, in `chrono` notation.
pub const BIRTHDAY_FORMAT: &str = "%Y.%m.%d";

// chrono alone accepts unpadded months and days, so the shape is checked first.
static BIRTHDAY_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}\.[0-9]{2}\.[0-9]{2}$").expect("valid birthday regex"));

/// Validation rule for [`Birthday`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BirthdayKind {}

/// A calendar date entered strictly as `YYYY.MM.DD`.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
/// use chrono::NaiveDate;
///
/// let birthday = Birthday::new("1992.01.01").unwrap();
/// assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1992, 1, 1).unwrap());
/// assert!(Birthday::new("1992-01-01").is_err());
/// ```
pub type Birthday = Field<BirthdayKind>;

impl FieldKind for BirthdayKind {
    type Value = NaiveDate;

    fn parse(raw: &str) -> Result<NaiveDate, ValidationError> {
        if !BIRTHDAY_SHAPE.is_match(raw) {
            return Err(ValidationError::InvalidBirthday(raw.to_string()));
        }
        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))
    }

    fn render(value: &NaiveDate) -> String {
        value.format(BIRTHDAY_FORMAT).to_string()
    }
}

impl Field<BirthdayKind> {
    /// Get the birthday as a date.
    pub fn date(&self) -> NaiveDate {
        *self.value()
    }
}

//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{RecordError, RecordResult};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Time left until a contact's next birthday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthdayCountdown {
    /// The birthday falls on the reference date.
    Today,

    /// Number of days until the next occurrence (1..=366).
    InDays(i64),
}

impl fmt::Display for BirthdayCountdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Today => write!(f, "birthday today"),
            Self::InDays(days) => write!(f, "{}", days),
        }
    }
}

/// A contact: a name, an ordered list of phones and an optional birthday.
///
/// Phones keep insertion order and may contain duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is empty.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `phone` and append it. Duplicates are allowed.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Remove the first phone equal to `phone`. Missing phones are ignored.
    pub fn remove_phone(&mut self, phone: &str) {
        if let Some(index) = self.position(phone) {
            self.phones.remove(index);
        }
    }

    /// Replace the first phone equal to `old_phone` in place.
    ///
    /// # Errors
    ///
    /// - `RecordError::PhoneNotFound` if no phone matches `old_phone`
    /// - `RecordError::Validation` if `new_phone` is invalid; the old phone is kept
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> RecordResult<&Phone> {
        let index = self
            .position(old_phone)
            .ok_or_else(|| RecordError::PhoneNotFound(old_phone.to_string()))?;
        let phone = &mut self.phones[index];
        phone.set(new_phone)?;
        Ok(phone)
    }

    /// Find the first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// Days until the next birthday, counted from the local calendar date.
    pub fn days_to_birthday(&self) -> Option<BirthdayCountdown> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday.
    ///
    /// Returns `None` when no birthday is set. A Feb 29 birthday falls on
    /// Feb 28 in non-leap years.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<BirthdayCountdown> {
        let birthday = self.birthday.as_ref()?.date();

        let mut next = occurrence_in(birthday, today.year())?;
        if next == today {
            return Some(BirthdayCountdown::Today);
        }
        if next < today {
            next = occurrence_in(birthday, today.year() + 1)?;
        }
        Some(BirthdayCountdown::InDays((next - today).num_days()))
    }

    /// Render the record using the local calendar date.
    pub fn render(&self) -> String {
        self.render_on(Local::now().date_naive())
    }

    /// Render the record as of `today`.
    pub fn render_on(&self, today: NaiveDate) -> String {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        let countdown = match self.days_to_birthday_from(today) {
            Some(countdown) => countdown.to_string(),
            None => "None".to_string(),
        };
        format!(
            "Contact name: {}, phones: {}, day to birthday: {}",
            self.name, phones, countdown
        )
    }

    fn position(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// The birthday's month and day in `year`.
fn occurrence_in(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record_with_birthday(birthday: &str) -> Record {
        let mut record = Record::new("John").unwrap();
        record.add_birthday(birthday).unwrap();
        record
    }

    #[test]
    fn test_record_new() {
        let record = Record::new("John").unwrap();
        assert_eq!(record.name().as_str(), "John");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_record_rejects_empty_name() {
        assert!(Record::new("").is_err());
    }

    #[test]
    fn test_add_phone_keeps_order_and_duplicates() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();
        record.add_phone("1234567890").unwrap();

        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["1234567890", "5555555555", "1234567890"]);
    }

    #[test]
    fn test_add_invalid_phone_fails() {
        let mut record = Record::new("John").unwrap();
        assert!(record.add_phone("12345").is_err());
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_remove_phone_removes_first_match_only() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();
        record.add_phone("1234567890").unwrap();

        record.remove_phone("1234567890");
        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["5555555555", "1234567890"]);
    }

    #[test]
    fn test_remove_missing_phone_is_noop() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();
        record.remove_phone("0000000000");
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_in_place() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();

        let edited = record.edit_phone("1234567890", "1112223333").unwrap();
        assert_eq!(edited.as_str(), "1112223333");

        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["1112223333", "5555555555"]);
    }

    #[test]
    fn test_edit_missing_phone_fails() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();

        let err = record.edit_phone("0000000000", "1112223333").unwrap_err();
        assert_eq!(err, RecordError::PhoneNotFound("0000000000".to_string()));
        assert_eq!(err.to_string(), "Phone: 0000000000 not found!");
    }

    #[test]
    fn test_edit_phone_invalid_replacement_keeps_old() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();

        let err = record.edit_phone("1234567890", "oops").unwrap_err();
        assert!(matches!(err, RecordError::Validation(_)));
        assert_eq!(record.phones()[0].as_str(), "1234567890");
    }

    #[test]
    fn test_find_phone() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();

        assert_eq!(
            record.find_phone("5555555555").map(Phone::as_str),
            Some("5555555555")
        );
        assert!(record.find_phone("0000000000").is_none());
    }

    #[test]
    fn test_add_birthday_replaces_previous() {
        let mut record = record_with_birthday("1990.12.01");
        record.add_birthday("1992.01.01").unwrap();
        assert_eq!(record.birthday().unwrap().date(), date(1992, 1, 1));
    }

    #[test]
    fn test_add_invalid_birthday_keeps_previous() {
        let mut record = record_with_birthday("1990.12.01");
        assert!(record.add_birthday("1992/01/01").is_err());
        assert_eq!(record.birthday().unwrap().date(), date(1990, 12, 1));
    }

    #[test]
    fn test_days_to_birthday_without_birthday() {
        let record = Record::new("John").unwrap();
        assert_eq!(record.days_to_birthday_from(date(2024, 6, 15)), None);
        assert_eq!(record.days_to_birthday(), None);
    }

    #[test]
    fn test_days_to_birthday_today() {
        let record = record_with_birthday("1990.06.15");
        assert_eq!(
            record.days_to_birthday_from(date(2024, 6, 15)),
            Some(BirthdayCountdown::Today)
        );
    }

    #[test]
    fn test_days_to_birthday_later_this_year() {
        let record = record_with_birthday("1990.06.20");
        assert_eq!(
            record.days_to_birthday_from(date(2024, 6, 15)),
            Some(BirthdayCountdown::InDays(5))
        );
    }

    #[test]
    fn test_days_to_birthday_tomorrow() {
        let record = record_with_birthday("1990.06.16");
        assert_eq!(
            record.days_to_birthday_from(date(2024, 6, 15)),
            Some(BirthdayCountdown::InDays(1))
        );
    }

    #[test]
    fn test_days_to_birthday_already_passed_uses_next_year() {
        let record = record_with_birthday("1992.01.01");
        // 2024.06.15 -> 2025.01.01
        assert_eq!(
            record.days_to_birthday_from(date(2024, 6, 15)),
            Some(BirthdayCountdown::InDays(200))
        );
    }

    #[test]
    fn test_days_to_birthday_yesterday_wraps_to_next_year() {
        let record = record_with_birthday("1990.06.14");
        // 2025.06.14 is 364 days after 2024.06.15
        assert_eq!(
            record.days_to_birthday_from(date(2024, 6, 15)),
            Some(BirthdayCountdown::InDays(364))
        );
    }

    #[test]
    fn test_days_to_birthday_feb_29_in_non_leap_year() {
        let record = record_with_birthday("2000.02.29");
        assert_eq!(
            record.days_to_birthday_from(date(2023, 2, 28)),
            Some(BirthdayCountdown::Today)
        );
        assert_eq!(
            record.days_to_birthday_from(date(2023, 2, 1)),
            Some(BirthdayCountdown::InDays(27))
        );
        assert_eq!(
            record.days_to_birthday_from(date(2024, 2, 1)),
            Some(BirthdayCountdown::InDays(28))
        );
    }

    #[test]
    fn test_render() {
        let mut record = record_with_birthday("1990.06.20");
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();
        assert_eq!(
            record.render_on(date(2024, 6, 15)),
            "Contact name: John, phones: 1234567890; 5555555555, day to birthday: 5"
        );
    }

    #[test]
    fn test_render_without_birthday() {
        let mut record = Record::new("Jane").unwrap();
        record.add_phone("9876543210").unwrap();
        assert_eq!(
            record.render(),
            "Contact name: Jane, phones: 9876543210, day to birthday: None"
        );
        assert_eq!(record.to_string(), record.render());
    }

    #[test]
    fn test_render_birthday_today() {
        let record = record_with_birthday("1990.06.15");
        assert_eq!(
            record.render_on(date(2024, 6, 15)),
            "Contact name: John, phones: , day to birthday: birthday today"
        );
    }

    #[test]
    fn test_record_serialization() {
        let mut record = record_with_birthday("1990.12.01");
        record.add_phone("1234567890").unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"name":"John","phones":["1234567890"],"birthday":"1990.12.01"}"#
        );
    }

    #[test]
    fn test_record_deserialization_validates_fields() {
        let ok: Result<Record, _> = serde_json::from_str(r#"{"name":"Jane"}"#);
        assert!(ok.unwrap().phones().is_empty());

        let bad: Result<Record, _> =
            serde_json::from_str(r#"{"name":"Jane","phones":["12"],"birthday":null}"#);
        assert!(bad.is_err());
    }
}

//! Test fixtures and sample data.
//!
//! This module provides reusable records and books for the integration tests.

use address_book::{AddressBook, Record};
use chrono::NaiveDate;

/// Fixed reference date so rendered output does not depend on the clock.
#[allow(dead_code)]
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

/// Create a record with the given phones and optional birthday.
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(name).unwrap();
    for phone in phones {
        record.add_phone(phone).unwrap();
    }
    if let Some(birthday) = birthday {
        record.add_birthday(birthday).unwrap();
    }
    record
}

/// The four contacts used by the demo driver.
#[allow(dead_code)]
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(sample_record(
        "John",
        &["1234567890", "5555555555"],
        Some("2022.11.01"),
    ));
    book.add_record(sample_record("Jane", &["9876543210"], None));
    book.add_record(sample_record(
        "John1",
        &["1234567890", "5555555555"],
        Some("1992.01.01"),
    ));
    book.add_record(sample_record(
        "John2",
        &["1234567890", "5555555555"],
        Some("1990.12.01"),
    ));
    book
}

/// A book of `count` phone-less contacts named `Contact0..`.
#[allow(dead_code)]
pub fn numbered_book(count: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..count {
        book.add_record(Record::new(&format!("Contact{}", i)).unwrap());
    }
    book
}

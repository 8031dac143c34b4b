//! Data models for the address book.
//!
//! This module contains the contact record stored in an address book.

pub mod record;

pub use record::{BirthdayCountdown, Record};

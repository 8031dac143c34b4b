//! Address Book - a personal contact manager.
//!
//! This library stores named contact records (name, phone numbers, birthday)
//! and supports lookup, search, editing, paged listing and persistence to a
//! single file.
//!
//! # Architecture
//!
//! - **domain**: Validated fields (`Name`, `Phone`, `Birthday`)
//! - **models**: The contact `Record`
//! - **book**: The `AddressBook` container, search and paging
//! - **repositories**: Persistence behind the `RecordRepository` trait
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;

// Re-export commonly used types
pub use book::{AddressBook, Pages, SearchOutcome};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{ConfigError, RecordError, StorageError};
pub use models::{BirthdayCountdown, Record};
pub use repositories::{JsonFileRepository, MemoryRepository, RecordRepository};

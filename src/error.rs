//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation failures live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when editing a contact record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// No phone on the record matches the one being edited
    #[error("Phone: {0} not found!")]
    PhoneNotFound(String),

    /// Replacement value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur while saving or loading an address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// File could not be opened, read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File contents are not a valid address book document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File was written by an incompatible format version
    #[error("Unsupported address book format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

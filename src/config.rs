//! Configuration management for the address book.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use crate::repositories::DEFAULT_BOOK_FILE;
use std::env;
use std::path::PathBuf;

/// Configuration for the address book binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File the book is saved to and loaded from (default: "Phone_Book")
    pub book_file: PathBuf,

    /// Records per page when listing the book (default: 2)
    pub page_size: usize,

    /// Log level used when `RUST_LOG` is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_FILE`: Persistence file path (default: "Phone_Book")
    /// - `ADDRESS_BOOK_PAGE_SIZE`: Records per page (default: 2)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let book_file = match env::var("ADDRESS_BOOK_FILE") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => PathBuf::from(val),
            Err(_) => PathBuf::from(DEFAULT_BOOK_FILE),
        };

        let page_size = Self::parse_env_usize("ADDRESS_BOOK_PAGE_SIZE", 2)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_PAGE_SIZE".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            book_file,
            page_size,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_file: PathBuf::from(DEFAULT_BOOK_FILE),
            page_size: 2,
            log_level: "info".to_string(),
        }
    }
}

//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment
//! variables, reading a `.env` file first if one is present.

use crate::error::{ConfigError, ConfigResult};
use crate::scheduling::DEFAULT_WINDOW_DAYS;
use std::env;
use std::path::PathBuf;

/// Default file the address book is stored in.
pub const DEFAULT_STORAGE_FILE: &str = "addressbook.json";

/// Largest accepted birthday window.
pub const MAX_WINDOW_DAYS: u32 = 366;

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON file holding the address book
    pub storage_path: PathBuf,

    /// Days ahead the `birthdays` command looks (default: 7)
    pub birthday_window_days: u32,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_FILE`: storage file path (default: addressbook.json)
    /// - `BIRTHDAY_WINDOW_DAYS`: birthday look-ahead in days (default: 7)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let storage_path = env::var("CONTACT_BOOK_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORAGE_FILE));

        if storage_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_FILE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let birthday_window_days = Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", DEFAULT_WINDOW_DAYS)?;
        Self::validate_window("BIRTHDAY_WINDOW_DAYS", birthday_window_days)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            storage_path,
            birthday_window_days,
            log_level,
        })
    }

    /// Check that a birthday window is within the accepted range.
    pub fn validate_window(var_name: &str, days: u32) -> ConfigResult<()> {
        if days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be at most {} days", MAX_WINDOW_DAYS),
            });
        }
        Ok(())
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_path: PathBuf::from(DEFAULT_STORAGE_FILE),
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            log_level: "warn".to_string(),
        }
    }
}

//! Contact Book - a local, single-user contact directory with birthday reminders.
//!
//! The library keeps names, phone numbers and birthdays, validates their
//! formats, and works out which contacts to congratulate in the coming days,
//! moving weekend birthdays to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for names, phone numbers and birthdays
//! - **models**: Contact records and the address book that owns them
//! - **scheduling**: Upcoming birthday calculation
//! - **repositories**: Whole-book persistence to a JSON file
//! - **commands**: Parsing and running assistant commands
//! - **assistant**: The interactive session loop
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod assistant;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod scheduling;

pub use assistant::Session;
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, ConfigError, StorageError, StorageResult};
pub use models::{AddressBook, Record};
pub use repositories::{AddressBookRepository, JsonFileRepository};
pub use scheduling::UpcomingBirthday;

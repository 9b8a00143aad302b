//! Command dispatcher for the assistant.
//!
//! Turns one line of user input into a [`Command`] and runs it against an
//! address book. Every failure is a [`CommandError`] that the session turns
//! into a reply line; nothing here prints or touches storage.

pub mod handlers;
mod parser;

pub use handlers::{execute, Outcome, HELP_TEXT};
pub use parser::parse_input;

use crate::error::BookError;
use thiserror::Error;

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, old_phone: String, new_phone: String },
    Phone { name: String },
    All,
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    Birthdays { days: Option<u32> },
    RemovePhone { name: String, phone: String },
    Delete { name: String },
    Help,
    Exit,
}

/// Errors produced while parsing or running a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command got the wrong number of arguments
    #[error("Usage: {0}")]
    Usage(&'static str),

    /// The command word is not recognised
    #[error("Invalid command: {0}")]
    UnknownCommand(String),

    /// An argument could not be interpreted
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The address book rejected the operation
    #[error(transparent)]
    Book(#[from] BookError),
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

//! Interactive assistant session.
//!
//! A session owns the address book for the lifetime of the program. It is
//! loaded from the repository when the session starts and written back
//! when the user exits or input runs out.

use crate::commands::{self, CommandError, Outcome};
use crate::error::StorageResult;
use crate::models::AddressBook;
use crate::repositories::AddressBookRepository;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

const WELCOME: &str = "Welcome to the assistant bot!";
const PROMPT: &str = "Enter a command: ";
const GOODBYE: &str = "Good bye!";

/// Source of the current date for birthday lookups.
pub type Clock = Box<dyn Fn() -> NaiveDate>;

/// One run of the assistant over a loaded address book.
pub struct Session {
    book: AddressBook,
    repository: Box<dyn AddressBookRepository>,
    window_days: u32,
    clock: Clock,
}

impl Session {
    /// Load the address book from `repository` and start a session.
    pub fn start(repository: Box<dyn AddressBookRepository>, window_days: u32) -> StorageResult<Self> {
        let book = repository.load()?;
        info!("Session started with {} contacts", book.len());
        Ok(Self {
            book,
            repository,
            window_days,
            clock: Box::new(|| Local::now().date_naive()),
        })
    }

    /// Replace the clock used to decide what "today" is.
    pub fn with_clock(mut self, clock: impl Fn() -> NaiveDate + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Handle one line of input.
    ///
    /// Returns `None` once the user asked to exit. Errors become reply text.
    pub fn handle_line(&mut self, line: &str) -> Option<String> {
        let result = commands::parse_input(line).and_then(|command| {
            debug!("Executing {:?}", command);
            commands::execute(command, &mut self.book, self.window_days, (self.clock)())
        });

        match result {
            Ok(Outcome::Reply(text)) => Some(text),
            Ok(Outcome::Exit) => None,
            Err(CommandError::UnknownCommand(word)) => {
                debug!("Unknown command {:?}", word);
                Some("Invalid command.\nTry 'help' command".to_string())
            }
            Err(usage @ CommandError::Usage(_)) => Some(usage.to_string()),
            Err(e) => {
                debug!("Command failed: {}", e);
                Some(format!("Error: {}", e))
            }
        }
    }

    /// Write the address book back to the repository.
    pub fn save(&self) -> StorageResult<()> {
        self.repository.save(&self.book)
    }

    /// Run the read-eval-print loop until exit or end of input, then save.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, and
    /// a failed read ends the loop like end of input, so the book is still
    /// saved.
    pub fn run<R, W>(&mut self, mut input: R, mut output: W) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(output, "{}", WELCOME)?;
        let mut buf = Vec::new();

        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            buf.clear();
            match input.read_until(b'\n', &mut buf) {
                Ok(0) => {
                    warn!("Input closed without exit command");
                    writeln!(output)?;
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    warn!("Failed to read input, ending session: {}", e);
                    writeln!(output)?;
                    break;
                }
            }

            let line = String::from_utf8_lossy(&buf);
            if line.trim().is_empty() {
                continue;
            }

            match self.handle_line(&line) {
                Some(reply) => writeln!(output, "{}", reply)?,
                None => break,
            }
        }

        self.save().context("Failed to save address book")?;
        info!("Saved {} contacts", self.book.len());
        writeln!(output, "{}", GOODBYE)?;
        Ok(())
    }
}

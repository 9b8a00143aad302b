//! Command handlers.
//!
//! Each handler performs one command against the address book and returns
//! the text to show the user.

use super::{Command, CommandResult};
use crate::models::{AddressBook, Record};
use chrono::NaiveDate;

/// Reply text for `help`.
pub const HELP_TEXT: &str = "\
'close', 'exit' to stop the program
'hello' to get a greeting
'add <name> <phone>' to create a contact or add a phone to it
'change <name> <old phone> <new phone>' to change a phone number
'phone <name>' to see the phone numbers of a contact
'remove-phone <name> <phone>' to remove a phone number
'delete <name>' to delete a contact
'all' to print all contacts
'add-birthday <name> <DD.MM.YYYY>' to set the birthday of a contact
'show-birthday <name>' to show the birthday of a contact
'birthdays [days]' to see upcoming birthdays (next 7 days by default)";

/// What the session should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Show this text and keep going.
    Reply(String),

    /// Save and end the session.
    Exit,
}

/// Run `command` against `book`.
///
/// `window_days` is the birthday window used when the command does not
/// name one; `today` anchors that window.
pub fn execute(
    command: Command,
    book: &mut AddressBook,
    window_days: u32,
    today: NaiveDate,
) -> CommandResult<Outcome> {
    let reply = match command {
        Command::Hello => "How can I help you?".to_string(),
        Command::Add { name, phone } => add_contact(book, &name, &phone)?,
        Command::Change {
            name,
            old_phone,
            new_phone,
        } => {
            book.modify(&name, |record| record.edit_phone(&old_phone, &new_phone))?;
            "Contact changed.".to_string()
        }
        Command::Phone { name } => format!("tel: {}", book.find(&name)?.phones_display()),
        Command::All => show_all(book),
        Command::AddBirthday { name, birthday } => {
            book.modify(&name, |record| record.set_birthday(&birthday))?;
            "Contact updated.".to_string()
        }
        Command::ShowBirthday { name } => {
            let record = book.find(&name)?;
            format!("Name: {}, Birthday: {}", record.name(), record.birthday())
        }
        Command::Birthdays { days } => {
            show_upcoming_birthdays(book, days.unwrap_or(window_days), today)
        }
        Command::RemovePhone { name, phone } => {
            book.modify(&name, |record| record.remove_phone(&phone))?;
            "Phone removed.".to_string()
        }
        Command::Delete { name } => {
            book.delete(&name)?;
            "Contact deleted.".to_string()
        }
        Command::Help => HELP_TEXT.to_string(),
        Command::Exit => return Ok(Outcome::Exit),
    };

    Ok(Outcome::Reply(reply))
}

/// Add a phone to an existing contact, or create the contact with it.
fn add_contact(book: &mut AddressBook, name: &str, phone: &str) -> CommandResult<String> {
    if book.contains(name) {
        book.modify(name, |record| record.add_phone(phone))?;
        return Ok("Contact updated.".to_string());
    }

    let record = Record::with_fields(name, [phone], None)?;
    book.add(record)?;
    Ok("Contact added.".to_string())
}

fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts saved.".to_string();
    }
    book.iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn show_upcoming_birthdays(book: &AddressBook, window_days: u32, today: NaiveDate) -> String {
    let upcoming = book.upcoming_birthdays_on(today, window_days);
    if upcoming.is_empty() {
        return "No upcoming birthdays.".to_string();
    }
    upcoming
        .iter()
        .map(|u| u.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

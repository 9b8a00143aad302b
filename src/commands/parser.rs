use super::{Command, CommandError, CommandResult};
use crate::config::MAX_WINDOW_DAYS;

const ADD_USAGE: &str = "add <name> <phone>";
const CHANGE_USAGE: &str = "change <name> <old phone> <new phone>";
const PHONE_USAGE: &str = "phone <name>";
const ADD_BIRTHDAY_USAGE: &str = "add-birthday <name> <DD.MM.YYYY>";
const SHOW_BIRTHDAY_USAGE: &str = "show-birthday <name>";
const BIRTHDAYS_USAGE: &str = "birthdays [days]";
const REMOVE_PHONE_USAGE: &str = "remove-phone <name> <phone>";
const DELETE_USAGE: &str = "delete <name>";

/// Parse one line of input.
///
/// The first whitespace-separated word is the command, matched without
/// regard to case; the remaining words are its arguments.
pub fn parse_input(line: &str) -> CommandResult<Command> {
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or_default().to_lowercase();
    let args: Vec<String> = words.map(str::to_string).collect();

    let command = match command.as_str() {
        "hello" => Command::Hello,
        "add" => {
            let [name, phone] = exact(args, ADD_USAGE)?;
            Command::Add { name, phone }
        }
        "change" => {
            let [name, old_phone, new_phone] = exact(args, CHANGE_USAGE)?;
            Command::Change {
                name,
                old_phone,
                new_phone,
            }
        }
        "phone" => {
            let [name] = exact(args, PHONE_USAGE)?;
            Command::Phone { name }
        }
        "all" => Command::All,
        "add-birthday" => {
            let [name, birthday] = exact(args, ADD_BIRTHDAY_USAGE)?;
            Command::AddBirthday { name, birthday }
        }
        "show-birthday" => {
            let [name] = exact(args, SHOW_BIRTHDAY_USAGE)?;
            Command::ShowBirthday { name }
        }
        "birthdays" => match args.as_slice() {
            [] => Command::Birthdays { days: None },
            [days] => Command::Birthdays {
                days: Some(parse_days(days)?),
            },
            _ => return Err(CommandError::Usage(BIRTHDAYS_USAGE)),
        },
        "remove-phone" => {
            let [name, phone] = exact(args, REMOVE_PHONE_USAGE)?;
            Command::RemovePhone { name, phone }
        }
        "delete" => {
            let [name] = exact(args, DELETE_USAGE)?;
            Command::Delete { name }
        }
        "help" => Command::Help,
        "close" | "exit" => Command::Exit,
        _ => return Err(CommandError::UnknownCommand(command)),
    };

    Ok(command)
}

fn exact<const N: usize>(args: Vec<String>, usage: &'static str) -> CommandResult<[String; N]> {
    args.try_into().map_err(|_| CommandError::Usage(usage))
}

fn parse_days(text: &str) -> CommandResult<u32> {
    text.parse::<u32>()
        .ok()
        .filter(|days| *days <= MAX_WINDOW_DAYS)
        .ok_or_else(|| {
            CommandError::InvalidArgument(format!(
                "days must be a number from 0 to {}, got: {}",
                MAX_WINDOW_DAYS, text
            ))
        })
}

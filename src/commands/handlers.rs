//! Command handlers.
//!
//! Each handler checks its argument count, calls into the directory, and
//! renders the successful outcome as reply text. Failures are returned as
//! `BookError` and rendered by [`super::messages::describe`].

use super::parser::Command;
use crate::domain::PhoneNumber;
use crate::error::{BookError, BookResult};
use crate::models::{ContactRecord, Directory};
use chrono::NaiveDate;

/// Reply to `hello`.
pub const GREETING: &str = "How can I help you?";

/// Reply to `close` and `exit`.
pub const FAREWELL: &str = "Good bye!";

/// Run a command that only touches the in-memory directory.
///
/// `save` and `exit` involve the snapshot and are handled by the session;
/// here they just acknowledge.
pub fn dispatch(
    command: Command,
    args: &[String],
    directory: &mut Directory,
    today: NaiveDate,
    window_days: u32,
) -> BookResult<String> {
    tracing::debug!("Dispatching '{}' with {} args", command, args.len());
    match command {
        Command::Hello => Ok(GREETING.to_string()),
        Command::Add => add_contact(args, directory),
        Command::Change => change_contact(args, directory),
        Command::Phone => show_phone(args, directory),
        Command::All => Ok(directory.to_string()),
        Command::AddBirthday => add_birthday(args, directory),
        Command::ShowBirthday => show_birthday(args, directory),
        Command::Birthdays => Ok(birthdays(directory, today, window_days)),
        Command::RemovePhone => remove_phone(args, directory),
        Command::Delete => delete_contact(args, directory),
        Command::Save => Ok("Address book saved.".to_string()),
        Command::Exit => Ok(FAREWELL.to_string()),
    }
}

/// Borrow the first `N` arguments, or fail with `WrongArguments`.
fn require<const N: usize>(command: Command, args: &[String]) -> BookResult<[&str; N]> {
    if args.len() < N {
        return Err(BookError::WrongArguments {
            command: command.keyword(),
            expected: command.usage(),
        });
    }
    Ok(std::array::from_fn(|i| args[i].as_str()))
}

fn record<'a>(directory: &'a Directory, name: &str) -> BookResult<&'a ContactRecord> {
    directory
        .find(name)
        .ok_or_else(|| BookError::RecordNotFound(name.to_string()))
}

fn record_mut<'a>(directory: &'a mut Directory, name: &str) -> BookResult<&'a mut ContactRecord> {
    directory
        .find_mut(name)
        .ok_or_else(|| BookError::RecordNotFound(name.to_string()))
}

/// `add <name> <phone>`: add a phone, creating the contact if needed.
///
/// A new contact is only stored once its first phone is valid.
pub fn add_contact(args: &[String], directory: &mut Directory) -> BookResult<String> {
    let [name, phone] = require::<2>(Command::Add, args)?;

    if let Some(existing) = directory.find_mut(name) {
        existing.add_phone(phone)?;
        return Ok("Contact updated.".to_string());
    }

    let mut created = ContactRecord::new(name)?;
    created.add_phone(phone)?;
    directory.add_record(created);
    Ok("Contact added.".to_string())
}

/// `change <name> <old phone> <new phone>`
pub fn change_contact(args: &[String], directory: &mut Directory) -> BookResult<String> {
    let [name, old_phone, new_phone] = require::<3>(Command::Change, args)?;
    record_mut(directory, name)?.edit_phone(old_phone, new_phone)?;
    Ok(format!("Phone changed for {}.", name))
}

/// `phone <name>`
pub fn show_phone(args: &[String], directory: &Directory) -> BookResult<String> {
    let [name] = require::<1>(Command::Phone, args)?;
    let phones = record(directory, name)?
        .phones()
        .iter()
        .map(PhoneNumber::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!("Phones of {}: {}", name, phones))
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], directory: &mut Directory) -> BookResult<String> {
    let [name, birthday] = require::<2>(Command::AddBirthday, args)?;
    record_mut(directory, name)?.set_birthday(birthday)?;
    Ok(format!("Birthday added/updated for {}.", name))
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[String], directory: &Directory) -> BookResult<String> {
    let [name] = require::<1>(Command::ShowBirthday, args)?;
    Ok(match record(directory, name)?.birthday() {
        Some(birthday) => format!("Birthday of {}: {}", name, birthday),
        None => "Birthday not set.".to_string(),
    })
}

/// `birthdays`: who to congratulate within the window.
pub fn birthdays(directory: &Directory, today: NaiveDate, window_days: u32) -> String {
    let upcoming = directory.upcoming_birthdays(today, window_days);
    if upcoming.is_empty() {
        return format!("No birthdays in the next {} days.", window_days);
    }

    let mut reply = String::from("Upcoming birthdays:");
    for entry in &upcoming {
        reply.push('\n');
        reply.push_str(&entry.to_string());
    }
    reply
}

/// `remove-phone <name> <phone>`
pub fn remove_phone(args: &[String], directory: &mut Directory) -> BookResult<String> {
    let [name, phone] = require::<2>(Command::RemovePhone, args)?;
    record_mut(directory, name)?.remove_phone(phone)?;
    Ok(format!("Phone removed for {}.", name))
}

/// `delete <name>`
pub fn delete_contact(args: &[String], directory: &mut Directory) -> BookResult<String> {
    let [name] = require::<1>(Command::Delete, args)?;
    directory.delete(name)?;
    Ok(format!("Contact {} deleted.", name))
}

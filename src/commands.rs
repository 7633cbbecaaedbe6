//! Command handlers
//!
//! Each handler translates the positional arguments of one REPL command
//! into address-book lookups and mutations and returns the reply text.
//! Handlers never print; their errors are rendered into user-facing
//! messages exactly once, at the dispatch site.

use chrono::Local;

use crate::book::AddressBook;
use crate::display;
use crate::error::{AssistantError, AssistantResult};
use crate::models::Record;

/// `add <name> <phone>`: create the record if needed, then append the phone
pub fn add_contact(args: &[String], book: &mut AddressBook) -> AssistantResult<String> {
    let name = args.first().ok_or(AssistantError::MissingArguments)?;
    let phone = args.get(1).ok_or(AssistantError::MissingArguments)?;

    // A brand-new record is inserted before the phone is validated, so
    // a rejected phone still leaves the empty record in the book.
    let message = if book.find(name).is_none() {
        book.add_record(Record::new(name.as_str()));
        "Contact added."
    } else {
        "Contact updated."
    };

    let record = book
        .find_mut(name)
        .ok_or_else(|| AssistantError::contact_not_found(name))?;
    record.add_phone(phone)?;

    Ok(message.to_string())
}

/// `change <name> <old> <new>`: replace the first phone equal to `old`
pub fn change_contact(args: &[String], book: &mut AddressBook) -> AssistantResult<String> {
    let name = args.first().ok_or(AssistantError::MissingArguments)?;
    let old_phone = args.get(1).ok_or(AssistantError::MissingArguments)?;
    let new_phone = args.get(2).ok_or(AssistantError::MissingArguments)?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| AssistantError::contact_not_found(name))?;

    // The old number is removed before the new one is validated, and
    // the replacement is appended at the end of the list.
    if !record.remove_phone(old_phone) {
        return Err(AssistantError::contact_not_found(name));
    }
    record.add_phone(new_phone)?;

    Ok("Contact updated.".to_string())
}

/// `phone <name>`: show the contact's phone numbers, comma-joined
pub fn show_phone(args: &[String], book: &AddressBook) -> AssistantResult<String> {
    let name = args.first().ok_or(AssistantError::MissingArguments)?;

    let record = book
        .find(name)
        .ok_or_else(|| AssistantError::contact_not_found(name))?;

    Ok(display::format_phone_list(record))
}

/// `all`: list every contact, one line each
pub fn show_all(args: &[String], book: &AddressBook) -> AssistantResult<String> {
    if !args.is_empty() {
        return Err(AssistantError::Validation(
            "This command does not take any arguments.".to_string(),
        ));
    }

    Ok(display::format_contact_list(&book.records()))
}

/// `add-birthday <name> <date>`: set the contact's birthday
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> AssistantResult<String> {
    let name = args.first().ok_or(AssistantError::MissingArguments)?;
    let date = args.get(1).ok_or(AssistantError::MissingArguments)?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| AssistantError::contact_not_found(name))?;
    record.add_birthday(date)?;

    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`: show the contact's birthday as `DD.MM.YYYY`
pub fn show_birthday(args: &[String], book: &AddressBook) -> AssistantResult<String> {
    let name = args.first().ok_or(AssistantError::MissingArguments)?;

    let record = book
        .find(name)
        .ok_or_else(|| AssistantError::contact_not_found(name))?;
    let birthday = record
        .birthday()
        .ok_or_else(|| AssistantError::contact_not_found(name))?;

    Ok(birthday.to_string())
}

/// `birthdays`: list contacts with a birthday in the next 7 days
pub fn birthdays(args: &[String], book: &AddressBook) -> AssistantResult<String> {
    if !args.is_empty() {
        return Err(AssistantError::Validation(
            "This command does not take any arguments.".to_string(),
        ));
    }

    let upcoming = book.get_upcoming_birthdays(Local::now().date_naive());
    Ok(display::format_upcoming_birthdays(&upcoming))
}

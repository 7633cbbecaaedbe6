//! Display formatting for terminal output
//!
//! Pure formatting helpers that turn records and query results into the
//! strings the REPL prints. Empty collections render as fixed messages.

use crate::book::UpcomingBirthday;
use crate::models::birthday::DATE_FORMAT;
use crate::models::{Phone, Record};

/// Format a record's phone numbers as a comma-separated list
pub fn format_phone_list(record: &Record) -> String {
    record
        .phones()
        .iter()
        .map(Phone::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format one `name: phone, phone, ...` line for a record
pub fn format_contact_line(record: &Record) -> String {
    format!("{}: {}", record.name(), format_phone_list(record))
}

/// Format the full contact listing, one line per record
pub fn format_contact_list(records: &[&Record]) -> String {
    if records.is_empty() {
        return "No contacts found.".to_string();
    }

    records
        .iter()
        .map(|record| format_contact_line(record))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the upcoming-birthdays listing, one `name: date` line per entry
pub fn format_upcoming_birthdays(entries: &[UpcomingBirthday]) -> String {
    if entries.is_empty() {
        return "No birthdays in the next 7 days.".to_string();
    }

    entries
        .iter()
        .map(|entry| format!("{}: {}", entry.name, entry.date.format(DATE_FORMAT)))
        .collect::<Vec<_>>()
        .join("\n")
}

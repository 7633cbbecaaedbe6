//! In-memory address book
//!
//! The address book owns every contact record, keyed by name. It lives
//! for the duration of the process; nothing is persisted.

use chrono::{Datelike, Duration, NaiveDate};
use std::collections::HashMap;

use crate::models::Record;

/// One entry of the upcoming-birthdays query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,
    /// The birthday projected onto the reference year
    pub date: NaiveDate,
}

/// The keyed collection of contact records
#[derive(Debug, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Insert a record, keyed by its name
    ///
    /// An existing record under the same name is replaced entirely; its
    /// prior phones and birthday are discarded.
    pub fn add_record(&mut self, record: Record) {
        self.records.insert(record.name().to_string(), record);
    }

    /// Look up a record by name
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by name for mutation
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Count records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the book holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get all records, sorted by name
    pub fn records(&self) -> Vec<&Record> {
        let mut records: Vec<&Record> = self.records.values().collect();
        records.sort_by(|a, b| a.name().cmp(b.name()));
        records
    }

    /// Contacts whose birthday falls within the inclusive window from
    /// `reference` to `reference + 7 days`
    ///
    /// Each birthday's month and day are projected onto the reference
    /// year only. A projected date already past in that year is
    /// excluded, even when the real anniversary is days away across the
    /// year boundary. A February 29 birthday is skipped when the
    /// reference year has no such date.
    pub fn get_upcoming_birthdays(&self, reference: NaiveDate) -> Vec<UpcomingBirthday> {
        let window_end = reference + Duration::days(7);
        let mut upcoming = Vec::new();

        for record in self.records() {
            if let Some(birthday) = record.birthday() {
                if let Some(projected) = birthday.date().with_year(reference.year()) {
                    if projected >= reference && projected <= window_end {
                        upcoming.push(UpcomingBirthday {
                            name: record.name().to_string(),
                            date: projected,
                        });
                    }
                }
            }
        }

        upcoming
    }
}

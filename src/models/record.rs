//! Contact record model
//!
//! A record is one contact: a name, the ordered list of phone numbers,
//! and an optional birthday. The name is immutable once the record is
//! created; phones and birthday are added through validating mutators,
//! so a record can never hold an unvalidated value.

use std::fmt;

use super::birthday::{Birthday, BirthdayParseError};
use super::phone::{Phone, PhoneParseError};

/// A contact's identifying name
///
/// No validation beyond non-emptiness, which the command tokenizer
/// already guarantees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    /// Create a name from raw input
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One contact: name, phone list, optional birthday
#[derive(Debug, Clone)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Get the contact's name
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the phone numbers in insertion order
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Get the birthday, if one has been set
    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Validate and append a phone number
    ///
    /// Duplicates are kept; the list has no uniqueness rule.
    pub fn add_phone(&mut self, value: &str) -> Result<(), PhoneParseError> {
        let phone = Phone::parse(value)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `value`
    ///
    /// Returns whether a phone was removed.
    pub fn remove_phone(&mut self, value: &str) -> bool {
        match self.phones.iter().position(|p| p.as_str() == value) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Validate and set the birthday, overwriting any previous one
    pub fn add_birthday(&mut self, value: &str) -> Result<(), BirthdayParseError> {
        let birthday = Birthday::parse(value)?;
        self.birthday = Some(birthday);
        Ok(())
    }
}

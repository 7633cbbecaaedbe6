//! Birthday field
//!
//! A birthday is a calendar date entered and shown in the fixed
//! `DD.MM.YYYY` format: two-digit day, two-digit month, four-digit year.

use chrono::NaiveDate;
use std::fmt;

/// Date format shared by parsing and all birthday output
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A contact's birthday
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from user input
    ///
    /// The shape is checked strictly before the calendar parse, so
    /// inputs like `5.6.1990` are rejected even though chrono would
    /// accept unpadded fields.
    pub fn parse(value: &str) -> Result<Self, BirthdayParseError> {
        let parts: Vec<&str> = value.split('.').collect();
        if parts.len() != 3 || parts[0].len() != 2 || parts[1].len() != 2 || parts[2].len() != 4 {
            return Err(BirthdayParseError);
        }

        let date =
            NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| BirthdayParseError)?;
        Ok(Self(date))
    }

    /// Get the underlying calendar date
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// Error type for birthday parsing; displays the fixed user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayParseError;

impl fmt::Display for BirthdayParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid date format, expected DD.MM.YYYY")
    }
}

impl std::error::Error for BirthdayParseError {}

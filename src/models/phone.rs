//! Phone number field
//!
//! A phone number is exactly 10 ASCII decimal digits. No separators, no
//! country prefix; normalization beyond the fixed-length digit check is
//! out of scope.

use std::fmt;

/// A validated 10-digit phone number
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Parse a phone number from user input
    ///
    /// Succeeds only if the input is exactly 10 ASCII digits.
    pub fn parse(value: &str) -> Result<Self, PhoneParseError> {
        if value.len() != 10 || !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(PhoneParseError);
        }
        Ok(Self(value.to_string()))
    }

    /// Get the phone number as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for phone parsing; displays the fixed user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneParseError;

impl fmt::Display for PhoneParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Phone must be exactly 10 digits")
    }
}

impl std::error::Error for PhoneParseError {}

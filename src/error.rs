//! Custom error types for the contact assistant
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every variant's display form is exactly
//! the text shown to the user when a command fails.

use thiserror::Error;

use crate::models::birthday::BirthdayParseError;
use crate::models::phone::PhoneParseError;

/// The main error type for assistant operations
#[derive(Error, Debug)]
pub enum AssistantError {
    /// Validation errors for contact fields; the message is the
    /// validator's text, surfaced verbatim
    #[error("{0}")]
    Validation(String),

    /// Unknown contact, or a contact missing the requested field
    #[error("Contact not found.")]
    NotFound { name: String },

    /// Too few positional arguments for a command
    #[error("Invalid format. Please enter name and phone number.")]
    MissingArguments,
}

impl AssistantError {
    /// Create a "not found" error for a contact name
    pub fn contact_not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// The field validators report their own parse errors; commands surface
// them as validation errors carrying the validator's message text.

impl From<PhoneParseError> for AssistantError {
    fn from(err: PhoneParseError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<BirthdayParseError> for AssistantError {
    fn from(err: BirthdayParseError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type alias for assistant operations
pub type AssistantResult<T> = Result<T, AssistantError>;

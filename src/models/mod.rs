//! Core data models for the contact assistant
//!
//! This module contains the validated field types (phone, birthday) and
//! the contact record built from them.

pub mod birthday;
pub mod phone;
pub mod record;

pub use birthday::Birthday;
pub use phone::Phone;
pub use record::{Name, Record};

//! Contact assistant - interactive address book for the terminal
//!
//! This library implements the core of a line-oriented assistant bot that
//! keeps an in-memory address book of contacts: validated phone numbers
//! and birthdays per record, the command handlers that mutate the book,
//! and the dispatch logic the binary wires to stdin/stdout.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (names, phones, birthdays, records)
//! - `book`: The address book collection and the upcoming-birthday query
//! - `commands`: One handler per interactive command
//! - `display`: Terminal output formatting
//! - `repl`: Line parsing and command dispatch
//!
//! # Example
//!
//! ```rust,ignore
//! use contact_assistant::book::AddressBook;
//! use contact_assistant::repl::{dispatch, parse_line};
//!
//! let mut book = AddressBook::new();
//! let (command, args) = parse_line("add Alice 0123456789").unwrap();
//! let outcome = dispatch(&command, &args, &mut book);
//! ```

pub mod book;
pub mod commands;
pub mod display;
pub mod error;
pub mod models;
pub mod repl;

pub use error::AssistantError;

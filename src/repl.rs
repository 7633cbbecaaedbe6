//! Line parsing and command dispatch for the interactive loop.

use crate::book::AddressBook;
use crate::commands;
use crate::error::AssistantResult;

/// What the loop should do after handling one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplOutcome {
    /// Print this reply and prompt again.
    Reply(String),
    /// Stop the loop.
    Exit,
}

/// Splits an input line into a lower-cased command token and its arguments.
///
/// Returns `None` for blank input, which the loop answers by re-prompting.
/// Argument tokens keep their original case.
pub fn parse_line(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    let args = tokens.map(|t| t.to_string()).collect();
    Some((command, args))
}

/// Routes one parsed command to its handler and renders the result.
pub fn dispatch(command: &str, args: &[String], book: &mut AddressBook) -> ReplOutcome {
    match command {
        "hello" => ReplOutcome::Reply("How can I help you?".to_string()),
        "add" => render(commands::add_contact(args, book)),
        "change" => render(commands::change_contact(args, book)),
        "phone" => render(commands::show_phone(args, book)),
        "all" => render(commands::show_all(args, book)),
        "add-birthday" => render(commands::add_birthday(args, book)),
        "show-birthday" => render(commands::show_birthday(args, book)),
        "birthdays" => render(commands::birthdays(args, book)),
        "close" | "exit" => ReplOutcome::Exit,
        _ => ReplOutcome::Reply("Invalid command. Please try again.".to_string()),
    }
}

// The single point where handler errors become user-facing text.
fn render(result: AssistantResult<String>) -> ReplOutcome {
    match result {
        Ok(message) => ReplOutcome::Reply(message),
        Err(err) => ReplOutcome::Reply(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(book: &mut AddressBook, line: &str) -> ReplOutcome {
        let (command, args) = parse_line(line).unwrap();
        dispatch(&command, &args, book)
    }

    #[test]
    fn test_parse_line_splits_command_and_args() {
        let (command, args) = parse_line("add Alice 0123456789").unwrap();
        assert_eq!(command, "add");
        assert_eq!(args, vec!["Alice", "0123456789"]);
    }

    #[test]
    fn test_parse_line_lowercases_command_only() {
        let (command, args) = parse_line("ADD Alice").unwrap();
        assert_eq!(command, "add");
        assert_eq!(args, vec!["Alice"]);
    }

    #[test]
    fn test_parse_line_collapses_whitespace() {
        let (command, args) = parse_line("  phone\t Alice  ").unwrap();
        assert_eq!(command, "phone");
        assert_eq!(args, vec!["Alice"]);
    }

    #[test]
    fn test_parse_line_blank_input() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   \t  ").is_none());
    }

    #[test]
    fn test_dispatch_hello() {
        let mut book = AddressBook::new();
        assert_eq!(
            run(&mut book, "hello"),
            ReplOutcome::Reply("How can I help you?".to_string())
        );
    }

    #[test]
    fn test_dispatch_add_then_phone() {
        let mut book = AddressBook::new();
        assert_eq!(
            run(&mut book, "add Alice 0123456789"),
            ReplOutcome::Reply("Contact added.".to_string())
        );
        assert_eq!(
            run(&mut book, "phone Alice"),
            ReplOutcome::Reply("0123456789".to_string())
        );
    }

    #[test]
    fn test_dispatch_close_and_exit() {
        let mut book = AddressBook::new();
        assert_eq!(run(&mut book, "close"), ReplOutcome::Exit);
        assert_eq!(run(&mut book, "exit"), ReplOutcome::Exit);
    }

    #[test]
    fn test_dispatch_unknown_command() {
        let mut book = AddressBook::new();
        assert_eq!(
            run(&mut book, "frobnicate"),
            ReplOutcome::Reply("Invalid command. Please try again.".to_string())
        );
    }

    #[test]
    fn test_dispatch_renders_not_found() {
        let mut book = AddressBook::new();
        assert_eq!(
            run(&mut book, "phone Alice"),
            ReplOutcome::Reply("Contact not found.".to_string())
        );
    }

    #[test]
    fn test_dispatch_renders_missing_arguments() {
        let mut book = AddressBook::new();
        assert_eq!(
            run(&mut book, "add"),
            ReplOutcome::Reply("Invalid format. Please enter name and phone number.".to_string())
        );
    }

    #[test]
    fn test_dispatch_renders_validation_message() {
        let mut book = AddressBook::new();
        assert_eq!(
            run(&mut book, "add Alice 123"),
            ReplOutcome::Reply("Phone must be exactly 10 digits".to_string())
        );
    }
}

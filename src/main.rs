use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

use contact_assistant::book::AddressBook;
use contact_assistant::repl::{self, ReplOutcome};

#[derive(Parser)]
#[command(
    name = "assistant",
    version,
    about = "Interactive terminal assistant for managing personal contacts",
    long_about = "An assistant bot that keeps an in-memory address book of contacts \
                  with phone numbers and birthdays. Commands are entered one per \
                  line at the prompt; type 'close' or 'exit' to leave."
)]
struct Cli {}

fn main() -> Result<()> {
    Cli::parse();

    print_greeting();

    let mut book = AddressBook::new();

    loop {
        print!("Enter a command: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            // End of input; leave without a farewell.
            break;
        }

        let (command, args) = match repl::parse_line(&line) {
            Some(parsed) => parsed,
            None => continue,
        };

        match repl::dispatch(&command, &args, &mut book) {
            ReplOutcome::Reply(message) => println!("{}", message),
            ReplOutcome::Exit => {
                println!("Good bye!");
                break;
            }
        }
    }

    Ok(())
}

fn print_greeting() {
    println!("Welcome! I am your assistant bot.");
    println!("Enter one of the commands:");
    println!("hello - get a greeting");
    println!("add [name] [phone number] - add a new contact");
    println!("change [name] [old phone number] [new phone number] - change an existing contact");
    println!("phone [name] - show the phone number for the given contact");
    println!("all - show all contacts");
    println!("add-birthday [name] [birthday] - add a birthday for the contact");
    println!("show-birthday [name] - show the contact's birthday");
    println!("birthdays - show birthdays in the next 7 days");
    println!("close or exit - stop the bot");
}

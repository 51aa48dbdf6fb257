// ⌨️ Command Dispatcher
// Parses one input line, runs the matching handler against the book,
// and turns the handler's result into the text printed at the prompt.

use crate::book::AddressBook;
use crate::entities::Record;
use crate::error::{BotError, BotResult};
use chrono::{Local, NaiveDate};
use tracing::debug;

pub const GREETING: &str = "How can I help you?";
pub const INVALID_COMMAND: &str = "Invalid command.";

pub const HELP_TEXT: &str = "Available commands:
  hello                         -> How can I help you?
  add <name> <phone>            -> add new contact or phone to existing
  change <name> <old> <new>     -> change phone for contact
  phone <name>                  -> show phones of contact
  all                           -> list all contacts
  add-birthday <name> <date>    -> set birthday (DD.MM.YYYY)
  show-birthday <name>          -> show birthday of contact
  birthdays                     -> show birthdays for next week
  help                          -> show this help
  close | exit                  -> quit";

// ============================================================================
// COMMAND
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    /// `close` or `exit`
    Exit,
    /// Blank input line
    Empty,
    Unknown(String),
}

impl Command {
    pub fn from_name(name: &str) -> Self {
        match name {
            "" => Command::Empty,
            "hello" => Command::Hello,
            "help" => Command::Help,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "close" | "exit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// Split a line into a lowercased command name and positional arguments
pub fn parse_input(line: &str) -> (String, Vec<String>) {
    let mut parts = line.split_whitespace();
    match parts.next() {
        Some(cmd) => (cmd.to_lowercase(), parts.map(str::to_string).collect()),
        None => (String::new(), Vec::new()),
    }
}

// ============================================================================
// OUTCOME
// ============================================================================

/// What the session should do after one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this text and keep reading
    Reply(String),
    /// Nothing to print
    Silent,
    /// Persist and stop
    Exit,
}

/// Run one input line against the book
pub fn dispatch(line: &str, book: &mut AddressBook) -> Outcome {
    let (name, args) = parse_input(line);
    let command = Command::from_name(&name);
    debug!(?command, args = args.len(), "dispatching");

    let result = match command {
        Command::Empty => return Outcome::Silent,
        Command::Exit => return Outcome::Exit,
        Command::Unknown(name) => {
            debug!(%name, "unknown command");
            return Outcome::Reply(INVALID_COMMAND.to_string());
        }
        Command::Hello => Ok(GREETING.to_string()),
        Command::Help => Ok(HELP_TEXT.to_string()),
        Command::Add => add_contact(&args, book),
        Command::Change => change_contact(&args, book),
        Command::Phone => show_phone(&args, book),
        Command::All => Ok(show_all(book)),
        Command::AddBirthday => add_birthday(&args, book),
        Command::ShowBirthday => show_birthday(&args, book),
        Command::Birthdays => Ok(birthdays(book)),
    };

    match result {
        Ok(text) => Outcome::Reply(text),
        Err(err) => {
            debug!(error = %err, "handler failed");
            Outcome::Reply(err.user_message())
        }
    }
}

// ============================================================================
// HANDLERS
// ============================================================================

fn arg(args: &[String], index: usize) -> BotResult<&str> {
    args.get(index)
        .map(String::as_str)
        .ok_or(BotError::MissingArgument)
}

fn record<'a>(book: &'a AddressBook, name: &str) -> BotResult<&'a Record> {
    book.find(name)
        .ok_or_else(|| BotError::NotFound(name.to_string()))
}

/// `add <name> [phone]` - create or update, then append the phone
pub fn add_contact(args: &[String], book: &mut AddressBook) -> BotResult<String> {
    let name = arg(args, 0)?;
    let phone = args.get(1).map(String::as_str);

    if let Some(existing) = book.find_mut(name) {
        if let Some(phone) = phone {
            existing.add_phone(phone)?;
        }
        return Ok("Contact updated.".to_string());
    }

    // Build fully before inserting so a bad phone leaves no record behind
    let mut fresh = Record::new(name)?;
    if let Some(phone) = phone {
        fresh.add_phone(phone)?;
    }
    book.add_record(fresh);
    Ok("Contact added.".to_string())
}

/// `change <name> <old> <new>`
pub fn change_contact(args: &[String], book: &mut AddressBook) -> BotResult<String> {
    let name = arg(args, 0)?;
    let old = arg(args, 1)?;
    let new = arg(args, 2)?;

    let existing = book
        .find_mut(name)
        .ok_or_else(|| BotError::NotFound(name.to_string()))?;

    if existing.edit_phone(old, new)? {
        Ok("Contact updated.".to_string())
    } else {
        Ok("Old phone not found.".to_string())
    }
}

/// `phone <name>`
pub fn show_phone(args: &[String], book: &AddressBook) -> BotResult<String> {
    let name = arg(args, 0)?;
    Ok(record(book, name)?
        .phones_line()
        .unwrap_or_else(|| "No phones.".to_string()))
}

/// `all`
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts yet.".to_string();
    }
    book.iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday <name> <DD.MM.YYYY>` - create or update, then set birthday
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> BotResult<String> {
    let name = arg(args, 0)?;
    let date = arg(args, 1)?;

    if let Some(existing) = book.find_mut(name) {
        existing.add_birthday(date)?;
    } else {
        let mut fresh = Record::new(name)?;
        fresh.add_birthday(date)?;
        book.add_record(fresh);
    }
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[String], book: &AddressBook) -> BotResult<String> {
    let name = arg(args, 0)?;
    Ok(record(book, name)?
        .birthday()
        .map(|b| b.to_string())
        .unwrap_or_else(|| "No birthday set.".to_string()))
}

/// `birthdays`
pub fn birthdays(book: &AddressBook) -> String {
    birthdays_from(book, Local::now().date_naive())
}

/// `birthdays` rendered for a given `today`
pub fn birthdays_from(book: &AddressBook, today: NaiveDate) -> String {
    let plan = book.upcoming_birthdays_from(today);
    if plan.is_empty() {
        return "No birthdays next week.".to_string();
    }
    plan.iter()
        .map(|(day, names)| format!("{}: {}", day, names.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// TESTS
// ============================================================================

// Address Book - Core Library
// Exposes all modules for use in the CLI and tests

pub mod error;
pub mod fields;
pub mod entities;
pub mod calendar;
pub mod book;
pub mod storage;
pub mod commands;
pub mod config;
pub mod session;

// Re-export commonly used types
pub use error::{BotError, BotResult};
pub use fields::{Birthday, Name, Phone};
pub use entities::Record;
pub use book::{AddressBook, BirthdayPlan};
pub use storage::{load, save, DEFAULT_FILE_NAME};
pub use commands::{dispatch, parse_input, Command, Outcome};
pub use config::{Cli, Config};
pub use session::{Exit, Session};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

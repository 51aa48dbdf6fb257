// 🔁 Session - the read-eval-print loop
//
// Owns the book and the file it came from. Generic over reader/writer so
// tests can drive it with in-memory buffers.

use crate::book::AddressBook;
use crate::commands::{self, Outcome};
use crate::config::Config;
use crate::storage;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::info;

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const HELP_HINT: &str = "Type \"help\" to see commands.";
pub const PROMPT: &str = "Enter a command: ";
pub const FAREWELL: &str = "Good bye!";

/// How the loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// `close` or `exit` was entered
    Command,
    /// Input stream closed
    EndOfInput,
}

pub struct Session {
    book: AddressBook,
    path: PathBuf,
}

impl Session {
    /// Load the book from the configured file (empty if absent or unreadable)
    pub fn open(config: &Config) -> Self {
        let book = storage::load(&config.file);
        Session::with_book(book, config.file.clone())
    }

    pub fn with_book(book: AddressBook, path: PathBuf) -> Self {
        Session { book, path }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> Result<()> {
        storage::save(&self.book, &self.path)
    }

    /// Run until `close`/`exit` or end of input; the book is saved either way
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<Exit> {
        writeln!(output, "{WELCOME}")?;
        writeln!(output, "{HELP_HINT}")?;

        let mut buf = Vec::new();
        let exit = loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            buf.clear();
            let read = match input.read_until(b'\n', &mut buf) {
                Ok(read) => read,
                Err(err) => {
                    self.save()?;
                    return Err(err).context("Failed to read input");
                }
            };
            if read == 0 {
                writeln!(output)?;
                break Exit::EndOfInput;
            }

            // Bytes that are not UTF-8 become U+FFFD and fall through to dispatch
            let line = String::from_utf8_lossy(&buf);
            match commands::dispatch(&line, &mut self.book) {
                Outcome::Reply(text) => writeln!(output, "{text}")?,
                Outcome::Silent => {}
                Outcome::Exit => break Exit::Command,
            }
        };

        self.save()?;
        if exit == Exit::Command {
            writeln!(output, "{FAREWELL}")?;
        }
        info!(?exit, records = self.book.len(), "session finished");
        Ok(exit)
    }
}

// ============================================================================
// TESTS
// ============================================================================

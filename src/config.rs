// ⚙️ Configuration - command-line flags with environment fallbacks

use crate::storage::DEFAULT_FILE_NAME;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "address-book")]
#[command(about = "Interactive contact book with birthday reminders")]
#[command(version)]
pub struct Cli {
    /// File the address book is loaded from and saved to
    #[arg(short, long, env = "ADDRESS_BOOK_FILE", default_value = DEFAULT_FILE_NAME)]
    pub file: PathBuf,

    /// Log filter for stderr output (e.g. warn, info, debug)
    #[arg(long, env = "ADDRESS_BOOK_LOG", default_value = "warn")]
    pub log_level: String,
}

/// Resolved settings handed to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub file: PathBuf,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            file: PathBuf::from(DEFAULT_FILE_NAME),
            log_level: "warn".to_string(),
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            file: cli.file,
            log_level: cli.log_level,
        }
    }
}

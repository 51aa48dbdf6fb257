use address_book::{Cli, Config, Session};
use anyhow::Result;
use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from(Cli::parse());

    // Logs go to stderr so stdout stays the conversation
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut session = Session::open(&config);
    let stdin = io::stdin();
    session.run(stdin.lock(), io::stdout())?;

    Ok(())
}

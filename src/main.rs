//! Address Book - Main entry point
//!
//! Runs the interactive assistant: reads commands from stdin, prints replies
//! to stdout, and saves the address book on `close` or `exit`.

use address_book::{Config, JsonSnapshotRepository, Reply, Session};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Logs go to stderr so they never mix with replies
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        "Using snapshot {} (birthday window: {} days)",
        config.snapshot_path.display(),
        config.birthday_window_days
    );

    let repository = JsonSnapshotRepository::new(&config.snapshot_path);
    let mut session = Session::open(repository, config.birthday_window_days).map_err(|e| {
        error!("Failed to load address book: {}", e);
        e
    })?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "Welcome to the assistant bot!")?;

    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "Enter a command: ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            // End of input behaves like `exit`
            session.save()?;
            writeln!(stdout)?;
            writeln!(stdout, "{}", address_book::commands::FAREWELL)?;
            break;
        };

        match session.handle_line(&line?)? {
            Reply::Continue(text) => writeln!(stdout, "{}", text)?,
            Reply::Exit(text) => {
                writeln!(stdout, "{}", text)?;
                break;
            }
        }
    }

    info!("Address book session finished");
    Ok(())
}

//! Interactive session over one directory.
//!
//! A session loads the directory once when opened, applies one input line
//! at a time, and writes the snapshot back on `save`, `close`, or `exit`.
//! Recoverable command failures, including a failed explicit `save`, become
//! reply text; a failed save on `close` or `exit` escapes to the caller.

use crate::commands::{self, Command, INVALID_COMMAND};
use crate::error::PersistenceResult;
use crate::models::Directory;
use crate::repositories::SnapshotRepository;
use chrono::NaiveDate;

/// What the caller should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and read the next line
    Continue(String),

    /// Print the text and stop; the snapshot has been saved
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Continue(text) | Reply::Exit(text) => text,
        }
    }
}

/// A running session bound to one snapshot repository.
pub struct Session<R: SnapshotRepository> {
    directory: Directory,
    repository: R,
    birthday_window_days: u32,
}

impl<R: SnapshotRepository> Session<R> {
    /// Load the directory from `repository` and start a session.
    pub fn open(repository: R, birthday_window_days: u32) -> PersistenceResult<Self> {
        let directory = repository.load()?;
        Ok(Self {
            directory,
            repository,
            birthday_window_days,
        })
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Write the current directory to the repository.
    pub fn save(&self) -> PersistenceResult<()> {
        self.repository.save(&self.directory)
    }

    /// Handle one input line using the local calendar date as today.
    pub fn handle_line(&mut self, line: &str) -> PersistenceResult<Reply> {
        self.handle_line_on(line, chrono::Local::now().date_naive())
    }

    /// Handle one input line as if the date were `today`.
    pub fn handle_line_on(&mut self, line: &str, today: NaiveDate) -> PersistenceResult<Reply> {
        let (keyword, args) = commands::parse_input(line);
        let Some(command) = Command::from_keyword(&keyword) else {
            tracing::debug!("Unknown command '{}'", keyword);
            return Ok(Reply::Continue(INVALID_COMMAND.to_string()));
        };

        match command {
            Command::Exit => self.save()?,
            Command::Save => {
                if let Err(e) = self.save() {
                    tracing::warn!("Explicit save failed: {}", e);
                    return Ok(Reply::Continue(format!(
                        "Error: could not save address book: {}",
                        e
                    )));
                }
            }
            _ => {}
        }

        let text = commands::dispatch(
            command,
            &args,
            &mut self.directory,
            today,
            self.birthday_window_days,
        )
        .unwrap_or_else(|e| {
            tracing::debug!("Command '{}' failed: {}", command, e);
            commands::describe(&e)
        });

        Ok(match command {
            Command::Exit => Reply::Exit(text),
            _ => Reply::Continue(text),
        })
    }
}

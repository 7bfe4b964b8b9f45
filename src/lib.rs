//! Address Book - a personal contact directory with birthday reminders.
//!
//! This library stores contacts (a name, phone numbers, and an optional
//! birthday), validates their formats, finds upcoming birthdays, and keeps
//! the whole directory in a snapshot file between runs.
//!
//! # Architecture
//!
//! - **domain**: Validated value types for names, phone numbers, and birthdays
//! - **models**: Contact records and the directory that owns them
//! - **repositories**: Snapshot persistence for the directory
//! - **commands**: Command parsing, handlers, and error-to-text translation
//! - **session**: The interactive session tying commands to persistence
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod session;

pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, ConfigError, PersistenceError, PersistenceResult};
pub use models::{ContactRecord, Directory, UpcomingBirthday};
pub use repositories::{JsonSnapshotRepository, SnapshotRepository};
pub use session::{Reply, Session};

//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by directory, record, and command operations.
///
/// Every variant is recoverable: the session reports it and keeps running.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A phone number, birthday, or name failed validation
    #[error(transparent)]
    Format(#[from] ValidationError),

    /// No record with this name exists
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// The record exists but does not hold this phone
    #[error("Phone {phone} not found for contact {name}")]
    PhoneNotFound { name: String, phone: String },

    /// A command received fewer arguments than it needs
    #[error("Wrong number of arguments for '{command}', expected: {expected}")]
    WrongArguments {
        command: &'static str,
        expected: &'static str,
    },
}

/// Errors that can occur while reading or writing a directory snapshot.
///
/// A missing snapshot is not an error; these end the session.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Reading or writing the snapshot file failed
    #[error("I/O error on snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot exists but could not be decoded or encoded
    #[error("Corrupt snapshot {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The snapshot was written by an incompatible version
    #[error("Unsupported snapshot version {found} in {path}")]
    UnsupportedVersion { path: PathBuf, found: u32 },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with PersistenceError
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

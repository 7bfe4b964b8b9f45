//! Data models for the address book.
//!
//! This module contains the contact record and the directory that owns
//! every record, along with the birthday scan results it produces.

pub mod contact;
pub mod directory;

pub use contact::ContactRecord;
pub use directory::{Directory, UpcomingBirthday, DEFAULT_BIRTHDAY_WINDOW_DAYS};

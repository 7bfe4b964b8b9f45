//! The command surface of the assistant.
//!
//! - **parser**: tokenizes input lines and maps keywords to [`Command`]s
//! - **handlers**: runs commands against a [`crate::models::Directory`]
//! - **messages**: turns every [`crate::error::BookError`] into reply text

pub mod handlers;
pub mod messages;
pub mod parser;

pub use handlers::{dispatch, FAREWELL, GREETING};
pub use messages::{describe, INVALID_COMMAND};
pub use parser::{parse_input, Command};

//! Rendering of command failures as user-facing text.

use crate::error::BookError;

/// Reply for an input line that names no known command.
pub const INVALID_COMMAND: &str = "Invalid command.";

/// Turn a recoverable error into the reply shown to the user.
pub fn describe(error: &BookError) -> String {
    match error {
        BookError::Format(validation) => format!("Error: {}.", validation),
        BookError::RecordNotFound(_) => "Contact not found.".to_string(),
        BookError::PhoneNotFound { name, phone } => {
            format!("Phone {} not found for {}.", phone, name)
        }
        BookError::WrongArguments { command, expected } => {
            format!(
                "Wrong number of arguments: {} expects {}.",
                command, expected
            )
        }
    }
}

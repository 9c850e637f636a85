use taskpad_commands::CommandError;
use taskpad_storage::StorageError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Command(#[from] CommandError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CliError {
    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::Command(CommandError::UnknownCommand { keyword }) => {
                format!(
                    "I don't recognize the command '{}'.\nKnown commands: list, todo, deadline, event, done, delete, find, bye.",
                    keyword
                )
            }
            CliError::Command(CommandError::Storage(e)) | CliError::Storage(e) => {
                format!("Could not access the task file: {}", e)
            }
            CliError::Command(e) => e.to_string(),
            CliError::Internal(msg) => {
                format!("Internal error: {}\n\nPlease report this issue.", msg)
            }
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;

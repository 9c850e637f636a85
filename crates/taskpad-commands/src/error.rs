use taskpad_domain::DomainError;
use taskpad_storage::StorageError;
use thiserror::Error;

/// Errors that can occur while parsing or executing a command
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Unknown command: {keyword}")]
    UnknownCommand { keyword: String },

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Storage(#[from] StorageError),
}

pub type CommandResult<T> = Result<T, CommandError>;

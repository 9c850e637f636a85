//! Domain error types for Taskpad

use thiserror::Error;

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A command that needs a description was given none
    #[error("The {keyword} command needs a description")]
    EmptyDescription { keyword: String },

    /// Input text does not match the expected grammar
    #[error("Invalid {context} format: {message}")]
    InvalidFormat { context: String, message: String },

    /// Task number token is not a positive integer
    #[error("'{text}' is not a valid task number")]
    InvalidTaskNumber { text: String },

    /// Date or time token does not match the expected format
    #[error("'{text}' is not a valid date/time (expected format {format})")]
    InvalidDateTime { text: String, format: String },

    /// Task number is outside the current list bounds
    #[error("Task number {number} is not in the list (it has {len} tasks)")]
    NonExistentTaskNumber { number: usize, len: usize },

    /// An equivalent task is already in the list
    #[error("This task is already in the list: {description}")]
    DuplicateTask { description: String },
}

impl DomainError {
    /// Create an empty description error
    pub fn empty_description(keyword: impl Into<String>) -> Self {
        DomainError::EmptyDescription {
            keyword: keyword.into(),
        }
    }

    /// Create an invalid format error
    pub fn invalid_format(context: impl Into<String>, message: impl Into<String>) -> Self {
        DomainError::InvalidFormat {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create an invalid task number error
    pub fn invalid_task_number(text: impl Into<String>) -> Self {
        DomainError::InvalidTaskNumber { text: text.into() }
    }

    /// Create an invalid date/time error
    pub fn invalid_date_time(text: impl Into<String>, format: impl Into<String>) -> Self {
        DomainError::InvalidDateTime {
            text: text.into(),
            format: format.into(),
        }
    }

    /// Create a non-existent task number error
    pub fn non_existent_task_number(number: usize, len: usize) -> Self {
        DomainError::NonExistentTaskNumber { number, len }
    }

    /// Create a duplicate task error
    pub fn duplicate_task(description: impl Into<String>) -> Self {
        DomainError::DuplicateTask {
            description: description.into(),
        }
    }
}

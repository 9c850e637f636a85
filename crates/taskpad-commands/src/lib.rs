//! Taskpad Command System
//!
//! Converts raw input lines into validated commands and executes them
//! against the task list, persisting every mutation through the store.
//!
//! # Examples
//!
//! ```no_run
//! use taskpad_commands::Command;
//! use taskpad_domain::TaskList;
//! use taskpad_storage::TaskStore;
//!
//! let store = TaskStore::with_default_path()?;
//! let mut tasks = store.load()?;
//!
//! let command = Command::parse("todo buy milk")?;
//! let message = command.execute(&mut tasks, &store)?;
//! println!("{}", message.prefix());
//! # Ok::<(), taskpad_commands::CommandError>(())
//! ```

pub mod command;
pub mod error;
pub mod message;
pub mod types;

pub use command::Command;
pub use error::{CommandError, CommandResult};
pub use message::Message;
pub use types::CommandKind;

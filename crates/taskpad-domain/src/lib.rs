//! Taskpad Domain
//!
//! Core task model for Taskpad: the task variants (todo, deadline, event),
//! the ordered task list they live in, the fixed date/time formats used
//! across input, storage and display, and the low-level parsing utilities
//! the command layer shares.
//!
//! # Examples
//!
//! ```
//! use taskpad_domain::{Task, TaskList};
//!
//! let mut list = TaskList::new();
//! list.add(Task::deadline("submit report /by 02/12/2019 1800")?)?;
//!
//! assert_eq!(
//!     list.get(1).unwrap().display_string(),
//!     "[D][ ] submit report (by: 2 Dec 2019 6:00 PM)"
//! );
//! # Ok::<(), taskpad_domain::DomainError>(())
//! ```

pub mod datetime;
pub mod error;
pub mod list;
pub mod parse;
pub mod task;

pub use error::{DomainError, DomainResult};
pub use list::TaskList;
pub use task::{Task, TaskKind};

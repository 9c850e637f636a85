//! Taskpad Storage
//!
//! Persistence for the task list (a flat text file, one storage line per
//! task, fully rewritten after every mutation) and the optional user
//! configuration file.

pub mod config;
pub mod error;
pub mod store;

pub use config::Config;
pub use error::{IoOperation, StorageError, StorageResult};
pub use store::TaskStore;

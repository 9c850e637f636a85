//! Taskpad CLI
//!
//! The interactive front end: argument parsing, logging setup, the
//! rustyline session loop, and output styling. All task semantics live in
//! `taskpad-domain`, `taskpad-commands` and `taskpad-storage`; this crate
//! only reads lines and prints responses.

pub mod args;
pub mod error;
pub mod logging;
pub mod output;
pub mod repl;

pub use args::Args;
pub use error::{CliError, CliResult};
pub use output::OutputStyle;
pub use repl::Session;

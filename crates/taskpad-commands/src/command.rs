//! Command variants: parsing raw input lines, executing them against a
//! task list, and persisting the result
//!
//! A command is only ever observable fully validated: `parse` either
//! returns an immutable variant or an error, never a partial value.
//! Mutating commands ask the store to rewrite the task file before their
//! message is returned; a failed write surfaces as an error in place of
//! the success message, and the in-memory mutation stands until the next
//! successful write converges the file.

use taskpad_domain::{parse, DomainError, Task, TaskList};
use taskpad_storage::TaskStore;
use tracing::debug;

use crate::error::{CommandError, CommandResult};
use crate::message::Message;
use crate::types::CommandKind;

const ADDED_PREFIX: &str = "Got it. I've added this task:";
const DONE_PREFIX: &str = "Nice! I've marked this task as done:";
const REMOVED_PREFIX: &str = "Noted. I've removed this task:";
const LIST_PREFIX: &str = "Here are the tasks in your list:";
const LIST_EMPTY_PREFIX: &str = "There is nothing in your list yet.";
const FIND_PREFIX: &str = "Here are the matching tasks in your list:";
const FIND_EMPTY_PREFIX: &str = "No matching tasks found.";
const BYE_PREFIX: &str = "Bye. Hope to see you again soon!";

/// A validated command, ready to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Display every task
    List,
    /// Add a plain task
    Todo { task: Task },
    /// Add a deadline task
    Deadline { task: Task },
    /// Add an event task
    Event { task: Task },
    /// Mark a task as done by its 1-based number
    Done { number: usize },
    /// Remove a task by its 1-based number
    Delete { number: usize },
    /// Display tasks whose description contains the keyword
    Find { keyword: String },
    /// End the session
    Bye,
}

impl Command {
    /// Parse one raw input line into a command.
    pub fn parse(line: &str) -> CommandResult<Command> {
        let trimmed = line.trim();
        let (keyword, rest) = match trimmed.split_once(' ') {
            Some((keyword, rest)) => (keyword, rest),
            None => (trimmed, ""),
        };

        let kind = CommandKind::from_keyword(keyword).ok_or_else(|| {
            CommandError::UnknownCommand {
                keyword: keyword.to_string(),
            }
        })?;
        debug!(%kind, "parsed command keyword");

        let command = match kind {
            CommandKind::List => {
                validate_no_arguments(kind, rest)?;
                Command::List
            }
            CommandKind::Todo => Command::Todo {
                task: Task::todo(rest)?,
            },
            CommandKind::Deadline => Command::Deadline {
                task: Task::deadline(rest)?,
            },
            CommandKind::Event => Command::Event {
                task: Task::event(rest)?,
            },
            CommandKind::Done => Command::Done {
                number: parse_task_number(kind, rest)?,
            },
            CommandKind::Delete => Command::Delete {
                number: parse_task_number(kind, rest)?,
            },
            CommandKind::Find => {
                parse::validate_description_not_empty(kind.keyword(), rest)?;
                Command::Find {
                    keyword: rest.trim().to_string(),
                }
            }
            CommandKind::Bye => {
                validate_no_arguments(kind, rest)?;
                Command::Bye
            }
        };
        Ok(command)
    }

    /// Execute the command against the task list, persisting mutations
    /// through the store before the message is returned.
    pub fn execute(&self, tasks: &mut TaskList, store: &TaskStore) -> CommandResult<Message> {
        match self {
            Command::List => Ok(list_message(tasks)),
            Command::Todo { task } | Command::Deadline { task } | Command::Event { task } => {
                tasks.add(task.clone())?;
                store.save(tasks)?;
                Ok(Message::new(ADDED_PREFIX)
                    .with_body_line(task.display_string())
                    .with_suffix(task_count_suffix(tasks)))
            }
            Command::Done { number } => {
                let display = tasks.mark_task_as_done(*number)?.display_string();
                store.save(tasks)?;
                Ok(Message::new(DONE_PREFIX).with_body_line(display))
            }
            Command::Delete { number } => {
                let removed = tasks.remove(*number)?;
                store.save(tasks)?;
                Ok(Message::new(REMOVED_PREFIX)
                    .with_body_line(removed.display_string())
                    .with_suffix(task_count_suffix(tasks)))
            }
            Command::Find { keyword } => Ok(find_message(tasks, keyword)),
            Command::Bye => Ok(Message::new(BYE_PREFIX)),
        }
    }

    /// Whether this command ends the session once its message is produced
    pub fn is_terminal(&self) -> bool {
        matches!(self, Command::Bye)
    }

    /// The keyword variant of this command
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::List => CommandKind::List,
            Command::Todo { .. } => CommandKind::Todo,
            Command::Deadline { .. } => CommandKind::Deadline,
            Command::Event { .. } => CommandKind::Event,
            Command::Done { .. } => CommandKind::Done,
            Command::Delete { .. } => CommandKind::Delete,
            Command::Find { .. } => CommandKind::Find,
            Command::Bye => CommandKind::Bye,
        }
    }
}

fn validate_no_arguments(kind: CommandKind, rest: &str) -> CommandResult<()> {
    if !rest.trim().is_empty() {
        return Err(DomainError::invalid_format(kind.keyword(), "takes no arguments").into());
    }
    Ok(())
}

fn parse_task_number(kind: CommandKind, rest: &str) -> CommandResult<usize> {
    parse::validate_description_not_empty(kind.keyword(), rest)?;
    Ok(parse::extract_task_number(rest)?)
}

fn list_message(tasks: &TaskList) -> Message {
    if tasks.is_empty() {
        return Message::new(LIST_EMPTY_PREFIX);
    }
    Message::new(LIST_PREFIX).with_body_lines(
        tasks
            .iter()
            .enumerate()
            .map(|(index, task)| format!("{}. {}", index + 1, task.display_string())),
    )
}

fn find_message(tasks: &TaskList, keyword: &str) -> Message {
    let matches = tasks.find(keyword);
    if matches.is_empty() {
        return Message::new(FIND_EMPTY_PREFIX);
    }
    Message::new(FIND_PREFIX).with_body_lines(
        matches
            .into_iter()
            .map(|(number, task)| format!("{}. {}", number, task.display_string())),
    )
}

fn task_count_suffix(tasks: &TaskList) -> String {
    format!("Now you have {} tasks in the list.", tasks.len())
}

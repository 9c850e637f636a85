//! Task variants and their text codecs
//!
//! Every variant knows how to parse itself from user text, render itself
//! for display and for storage, and parse itself back from a storage line.
//! The storage grammar is `[<icon>][<status>] <description>` plus a
//! variant-specific suffix.

use chrono::{NaiveDate, NaiveTime};

use crate::datetime;
use crate::error::{DomainError, DomainResult};
use crate::parse;

/// Marker separating a deadline action from its date/time
const DEADLINE_SPLITTER: &str = "/by";

/// Marker separating an event action from its date/time window
const EVENT_SPLITTER: &str = "/at";

/// Separator between date and time tokens
const DATE_TIME_SPLITTER: &str = " ";

/// Status marker for a completed task
const STATUS_DONE: char = 'X';

/// Status marker for a pending task
const STATUS_PENDING: char = ' ';

/// Task variant tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline,
    Event,
}

impl TaskKind {
    /// One-letter icon used in display and storage strings
    pub fn icon(&self) -> char {
        match self {
            TaskKind::Todo => 'T',
            TaskKind::Deadline => 'D',
            TaskKind::Event => 'E',
        }
    }

    /// Resolve a storage icon back to a task kind
    pub fn from_icon(icon: char) -> Option<TaskKind> {
        match icon {
            'T' => Some(TaskKind::Todo),
            'D' => Some(TaskKind::Deadline),
            'E' => Some(TaskKind::Event),
            _ => None,
        }
    }

    /// The command keyword that creates this kind of task
    pub fn keyword(&self) -> &'static str {
        match self {
            TaskKind::Todo => "todo",
            TaskKind::Deadline => "deadline",
            TaskKind::Event => "event",
        }
    }
}

/// A unit of work with a description and completion state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// A plain task with no time attached
    Todo { description: String, done: bool },
    /// A task due at a specific date and time
    Deadline {
        description: String,
        done: bool,
        date: NaiveDate,
        time: NaiveTime,
    },
    /// A task occupying a time window on one date
    Event {
        description: String,
        done: bool,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    },
}

impl Task {
    /// Create a plain task from its description text.
    pub fn todo(text: &str) -> DomainResult<Task> {
        parse::validate_description_not_empty(TaskKind::Todo.keyword(), text)?;
        Ok(Task::Todo {
            description: text.trim().to_string(),
            done: false,
        })
    }

    /// Create a deadline task from `<action> /by <date> <time>`.
    pub fn deadline(text: &str) -> DomainResult<Task> {
        let keyword = TaskKind::Deadline.keyword();
        let parts = parse::split_by_splitter(text, DEADLINE_SPLITTER);
        parse::validate_part_count(2, &parts, keyword)?;

        let description = parts[0].trim();
        parse::validate_description_not_empty(keyword, description)?;
        let (date, time) = parse_date_time(parts[1], keyword)?;

        Ok(Task::Deadline {
            description: description.to_string(),
            done: false,
            date,
            time,
        })
    }

    /// Create an event task from `<action> /at <date> <start> <end>`.
    pub fn event(text: &str) -> DomainResult<Task> {
        let keyword = TaskKind::Event.keyword();
        let parts = parse::split_by_splitter(text, EVENT_SPLITTER);
        parse::validate_part_count(2, &parts, keyword)?;

        let description = parts[0].trim();
        parse::validate_description_not_empty(keyword, description)?;
        let (date, start, end) = parse_date_window(parts[1], keyword)?;

        Ok(Task::Event {
            description: description.to_string(),
            done: false,
            date,
            start,
            end,
        })
    }

    /// Parse a task back from its storage line.
    ///
    /// The line must match the exact storage grammar for its icon marker;
    /// anything else is rejected so the caller can abort the load with a
    /// diagnostic instead of silently dropping data.
    pub fn from_storage_line(line: &str) -> DomainResult<Task> {
        let bytes = line.as_bytes();
        let prefix_ok = bytes.len() > 7
            && bytes[0] == b'['
            && bytes[2] == b']'
            && bytes[3] == b'['
            && bytes[5] == b']'
            && bytes[6] == b' ';
        if !prefix_ok {
            return Err(DomainError::invalid_format(
                "stored task",
                "expected a '[<icon>][<status>] ' prefix",
            ));
        }

        let kind = TaskKind::from_icon(bytes[1] as char).ok_or_else(|| {
            DomainError::invalid_format(
                "stored task",
                format!("unknown task icon '{}'", bytes[1] as char),
            )
        })?;
        let done = match bytes[4] as char {
            STATUS_DONE => true,
            STATUS_PENDING => false,
            other => {
                return Err(DomainError::invalid_format(
                    "stored task",
                    format!("unknown status marker '{}'", other),
                ))
            }
        };

        let payload = &line[7..];
        let mut task = match kind {
            TaskKind::Todo => Task::todo(payload)?,
            TaskKind::Deadline => Task::deadline(payload)?,
            TaskKind::Event => Task::event(payload)?,
        };
        if done {
            task.mark_done();
        }
        Ok(task)
    }

    /// The variant tag of this task
    pub fn kind(&self) -> TaskKind {
        match self {
            Task::Todo { .. } => TaskKind::Todo,
            Task::Deadline { .. } => TaskKind::Deadline,
            Task::Event { .. } => TaskKind::Event,
        }
    }

    /// The task description
    pub fn description(&self) -> &str {
        match self {
            Task::Todo { description, .. }
            | Task::Deadline { description, .. }
            | Task::Event { description, .. } => description,
        }
    }

    /// Whether the task has been completed
    pub fn is_done(&self) -> bool {
        match self {
            Task::Todo { done, .. } | Task::Deadline { done, .. } | Task::Event { done, .. } => {
                *done
            }
        }
    }

    /// Mark the task as done. The flag only ever moves false -> true.
    pub fn mark_done(&mut self) {
        match self {
            Task::Todo { done, .. } | Task::Deadline { done, .. } | Task::Event { done, .. } => {
                *done = true
            }
        }
    }

    /// Whether two tasks describe the same work item: same variant, same
    /// description, same temporal fields. Completion state is ignored.
    pub fn is_duplicate_of(&self, other: &Task) -> bool {
        match (self, other) {
            (
                Task::Todo { description: a, .. },
                Task::Todo { description: b, .. },
            ) => a == b,
            (
                Task::Deadline {
                    description: a,
                    date: da,
                    time: ta,
                    ..
                },
                Task::Deadline {
                    description: b,
                    date: db,
                    time: tb,
                    ..
                },
            ) => a == b && da == db && ta == tb,
            (
                Task::Event {
                    description: a,
                    date: da,
                    start: sa,
                    end: ea,
                    ..
                },
                Task::Event {
                    description: b,
                    date: db,
                    start: sb,
                    end: eb,
                    ..
                },
            ) => a == b && da == db && sa == sb && ea == eb,
            _ => false,
        }
    }

    /// Render the task for human display, using the display date/time
    /// formats.
    pub fn display_string(&self) -> String {
        match self {
            Task::Todo { description, .. } => {
                format!(
                    "[{}][{}] {}",
                    self.kind().icon(),
                    self.status_marker(),
                    description
                )
            }
            Task::Deadline {
                description,
                date,
                time,
                ..
            } => {
                format!(
                    "[{}][{}] {} (by: {} {})",
                    self.kind().icon(),
                    self.status_marker(),
                    description,
                    datetime::display_date(*date),
                    datetime::display_time(*time)
                )
            }
            Task::Event {
                description,
                date,
                start,
                end,
                ..
            } => {
                format!(
                    "[{}][{}] {} (at: {} {} - {})",
                    self.kind().icon(),
                    self.status_marker(),
                    description,
                    datetime::display_date(*date),
                    datetime::display_time(*start),
                    datetime::display_time(*end)
                )
            }
        }
    }

    /// Render the task for storage. `from_storage_line` parses this back
    /// exactly.
    pub fn storage_string(&self) -> String {
        match self {
            Task::Todo { description, .. } => {
                format!(
                    "[{}][{}] {}",
                    self.kind().icon(),
                    self.status_marker(),
                    description
                )
            }
            Task::Deadline {
                description,
                date,
                time,
                ..
            } => {
                format!(
                    "[{}][{}] {} {} {} {}",
                    self.kind().icon(),
                    self.status_marker(),
                    description,
                    DEADLINE_SPLITTER,
                    datetime::format_date(*date),
                    datetime::format_time(*time)
                )
            }
            Task::Event {
                description,
                date,
                start,
                end,
                ..
            } => {
                format!(
                    "[{}][{}] {} {} {} {} {}",
                    self.kind().icon(),
                    self.status_marker(),
                    description,
                    EVENT_SPLITTER,
                    datetime::format_date(*date),
                    datetime::format_time(*start),
                    datetime::format_time(*end)
                )
            }
        }
    }

    fn status_marker(&self) -> char {
        if self.is_done() {
            STATUS_DONE
        } else {
            STATUS_PENDING
        }
    }
}

/// Parse `<date> <time>` out of the text after a splitter.
fn parse_date_time(text: &str, context: &str) -> DomainResult<(NaiveDate, NaiveTime)> {
    let tokens = parse::split_by_splitter(text.trim(), DATE_TIME_SPLITTER);
    parse::validate_part_count(2, &tokens, context)?;

    let date = datetime::parse_date(tokens[0])?;
    let time = datetime::parse_time(tokens[1])?;
    Ok((date, time))
}

/// Parse `<date> <start> <end>` out of the text after a splitter.
fn parse_date_window(
    text: &str,
    context: &str,
) -> DomainResult<(NaiveDate, NaiveTime, NaiveTime)> {
    let tokens = parse::split_by_splitter(text.trim(), DATE_TIME_SPLITTER);
    parse::validate_part_count(3, &tokens, context)?;

    let date = datetime::parse_date(tokens[0])?;
    let start = datetime::parse_time(tokens[1])?;
    let end = datetime::parse_time(tokens[2])?;
    Ok((date, start, end))
}

// Interactive session loop

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use taskpad_commands::{Command, Message};
use taskpad_domain::TaskList;
use taskpad_storage::TaskStore;
use tracing::debug;

use crate::error::{CliError, CliResult};
use crate::output::OutputStyle;

const PROMPT: &str = "> ";

/// One interactive session over a task store
pub struct Session {
    tasks: TaskList,
    store: TaskStore,
    style: OutputStyle,
}

/// What a handled line produced
pub struct Handled {
    pub message: Message,
    pub terminal: bool,
}

impl Session {
    /// Load the persisted task list and start a session over it.
    pub fn new(store: TaskStore) -> CliResult<Self> {
        let tasks = store.load()?;
        debug!(count = tasks.len(), "session loaded");
        Ok(Session {
            tasks,
            store,
            style: OutputStyle::default(),
        })
    }

    /// Number of tasks currently in the session
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Parse and execute one input line.
    ///
    /// Every error is recoverable; the caller renders it and keeps the
    /// session going.
    pub fn handle_line(&mut self, line: &str) -> CliResult<Handled> {
        let command = Command::parse(line)?;
        let terminal = command.is_terminal();
        let message = command.execute(&mut self.tasks, &self.store)?;
        Ok(Handled { message, terminal })
    }

    /// Run the interactive loop until `bye` or end of input.
    pub fn run(&mut self) -> CliResult<()> {
        let mut editor =
            DefaultEditor::new().map_err(|e| CliError::Internal(e.to_string()))?;

        println!("{}", self.style.greeting());

        loop {
            match editor.readline(PROMPT) {
                Ok(line) => {
                    let line = line.trim().to_string();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = editor.add_history_entry(&line);

                    match self.handle_line(&line) {
                        Ok(handled) => {
                            println!("{}", self.style.message(&handled.message));
                            if handled.terminal {
                                break;
                            }
                        }
                        Err(e) => println!("{}", self.style.error(&e.user_message())),
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => return Err(CliError::Internal(e.to_string())),
            }
        }

        Ok(())
    }
}

// Command-line arguments, shared between main and tests

use std::path::PathBuf;

use clap::Parser;

/// Line-driven personal task assistant
#[derive(Parser, Debug)]
#[command(name = "taskpad", version, about)]
pub struct Args {
    /// Override the task data file location
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Show debug output
    #[arg(short, long)]
    pub verbose: bool,

    /// Only show errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

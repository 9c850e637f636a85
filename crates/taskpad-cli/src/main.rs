// Taskpad CLI entry point

use clap::Parser;
use taskpad_cli::{args::Args, error::CliResult, logging, output::OutputStyle, repl::Session};
use taskpad_storage::{Config, TaskStore};

fn main() {
    let args = Args::parse();
    logging::init(args.verbose, args.quiet);

    if let Err(e) = run(args) {
        let style = OutputStyle::default();
        eprintln!("{}", style.error(&e.user_message()));
        std::process::exit(1);
    }
}

fn run(args: Args) -> CliResult<()> {
    let store = resolve_store(&args)?;
    Session::new(store)?.run()
}

/// Pick the task file: the --data-file flag wins, then the config file,
/// then the default location.
fn resolve_store(args: &Args) -> CliResult<TaskStore> {
    if let Some(path) = &args.data_file {
        return Ok(TaskStore::new(path.clone()));
    }

    let config = Config::load()?;
    match config.data_file {
        Some(path) => Ok(TaskStore::new(path)),
        None => Ok(TaskStore::with_default_path()?),
    }
}

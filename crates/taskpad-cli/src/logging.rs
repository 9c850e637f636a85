// Logging setup based on CLI flags

use tracing::Level;

/// Initialize the global tracing subscriber.
///
/// Diagnostics go to stderr so they never interleave with the
/// conversational output on stdout.
pub fn init(verbose: bool, quiet: bool) {
    let level = max_level(verbose, quiet);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn max_level(verbose: bool, quiet: bool) -> Level {
    if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_selection() {
        assert_eq!(max_level(false, false), Level::WARN);
        assert_eq!(max_level(true, false), Level::DEBUG);
        assert_eq!(max_level(false, true), Level::ERROR);
    }
}

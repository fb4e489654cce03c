use std::io;

use tracing::Level;
use tracing_subscriber::fmt;

/**
 * Install the process-wide subscriber. Events go to standard error since standard output carries
 * the generated source. Only the first call in a process takes effect.
 */
pub fn bootstrap_logs(verbosity: u8) {
    let installed = fmt()
        .with_max_level(level_for_verbosity(verbosity))
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init();

    if installed.is_err() {
        tracing::trace!("log subscriber already installed");
    }
}

fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

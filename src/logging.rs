//! Logger setup for the command-line binary

use env_logger::{Builder, Env};
use log::SetLoggerError;

/// Default filter for a number of `-v` flags
#[must_use]
pub const fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global logger
///
/// `RUST_LOG` takes precedence over `verbosity`.
///
/// # Errors
/// Returns an error if a global logger is already installed.
pub fn init(verbosity: u8) -> Result<(), SetLoggerError> {
    Builder::from_env(Env::default().default_filter_or(level_for(verbosity)))
        .format_timestamp(None)
        .try_init()
}

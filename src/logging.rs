//! Logging setup for the binary. Log lines go to stderr so that they never
//! mix with the session output on stdout.

use anyhow::Context;
use env_logger::{Builder, Target};
use log::LevelFilter;

use crate::config::LOG_ENV;

/// Level used when neither `-v` nor [`LOG_ENV`] says otherwise.
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Reads [`LOG_ENV`] on top of the default level; `verbosity` from the
/// command line wins over both.
fn builder(verbosity: Option<LevelFilter>) -> Builder {
    let mut builder = Builder::new();
    let _ = builder
        .filter_level(DEFAULT_LEVEL)
        .parse_env(LOG_ENV)
        .target(Target::Stderr);
    if let Some(level) = verbosity {
        let _ = builder.filter_level(level);
    }
    builder
}

/// Installs the stderr logger.
///
/// # Errors
///
/// Fails if a logger has already been installed.
pub fn init(verbosity: Option<LevelFilter>) -> anyhow::Result<()> {
    builder(verbosity)
        .try_init()
        .context("logger is already installed")
}

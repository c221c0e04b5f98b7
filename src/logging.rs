//! Logging setup for `rb`.
//!
//! Verbosity comes from `-v`/`-q`; `RUST_LOG` takes precedence when set.
//! Output goes to stderr, or to a log file when configured.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Map CLI flags to a level: `-q` errors only, default warnings, then one
/// step per `-v`.
#[must_use]
pub const fn level_for(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialize the global subscriber once.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init_logging(verbose: u8, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    let level = level_for(verbose, quiet);
    let default_filter = format!("recordbook={level},recordbook_lib={level}");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let registry = tracing_subscriber::registry().with(env_filter);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            registry
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false),
                )
                .try_init()?;
        }
        None => {
            registry
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(false),
                )
                .try_init()?;
        }
    }

    Ok(())
}

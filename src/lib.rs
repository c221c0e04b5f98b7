//! `recordbook` - Local record book
//!
//! This crate provides the `rb` CLI on top of `recordbook-lib`. The CLI is the
//! host: it supplies control values, prompts for confirmation and prints what
//! the controller renders.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`config`] - Configuration management (YAML, env, flags)
//! - [`format`] - Output formatting (text, JSON)
//! - [`logging`] - Tracing subscriber setup

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod format;
pub mod logging;

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}

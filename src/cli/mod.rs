//! CLI module for datagate
//!
//! Provides command-line interface for:
//! - serve: Start the HTTP server
//! - exec: Execute requests from stdin, one JSON object per line

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{exec, run, run_command, serve};
pub use errors::{CliError, CliResult};

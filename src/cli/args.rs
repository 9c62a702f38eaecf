//! CLI argument definitions using clap
//!
//! Commands:
//! - datagate serve [--port <port>]
//! - datagate exec

use clap::{Parser, Subcommand};

/// datagate - serverless SQL data API for managed relational databases
#[derive(Parser, Debug)]
#[command(name = "datagate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Override the configured listen port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Execute requests from stdin, one JSON object per line
    Exec,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

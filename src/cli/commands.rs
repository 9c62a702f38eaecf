//! CLI command implementations
//!
//! Both commands build the same stack: configuration from the
//! environment, an HTTP gateway client, and the dispatch handler. The
//! serve command exposes it over HTTP; exec drives it from stdin.

use std::sync::Arc;

use crate::api::{ApiHandler, ErrorBody};
use crate::config::Config;
use crate::gateway::{ConnectionContext, HttpGateway};
use crate::http_server::{HttpServer, HttpServerConfig};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{read_lines, write_json};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { port } => serve(port),
        Command::Exec => exec(),
    }
}

/// Build the dispatch handler from a resolved configuration
fn build_handler(config: &Config) -> ApiHandler {
    let gateway = Arc::new(HttpGateway::new(config.gateway_endpoint.clone()));
    let ctx = ConnectionContext::new(
        config.resource_id.clone(),
        config.credential_id.clone(),
        config.database.clone(),
        gateway,
    );
    ApiHandler::new(ctx)
}

/// Start the HTTP server
///
/// A missing or invalid environment configuration is fatal; the
/// process never serves traffic without a complete connection setup.
pub fn serve(port: Option<u16>) -> CliResult<()> {
    let config = Config::from_env()?;
    let handler = build_handler(&config);

    let http_config = HttpServerConfig::with_port(port.unwrap_or(config.port));
    let server = HttpServer::new(http_config, handler);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Execute requests from stdin, one JSON object per line
///
/// Request-level failures go to stdout in the client error shape and
/// do not stop the loop; only stdin and stdout failures are fatal.
pub fn exec() -> CliResult<()> {
    let config = Config::from_env()?;
    let handler = build_handler(&config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::io_error(format!("Failed to create tokio runtime: {}", e)))?;

    for line_result in read_lines() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        let output = rt.block_on(process_line(&handler, &line));
        write_json(&output)?;
    }

    Ok(())
}

/// Process one request line into one output line
async fn process_line(handler: &ApiHandler, line: &str) -> String {
    match handler.handle_raw(line).await {
        Ok(response) => response.to_json(),
        Err(err) => ErrorBody::from(&err).to_json(),
    }
}

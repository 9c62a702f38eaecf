//! JSON I/O handling for CLI
//!
//! - Input: one JSON object per stdin line
//! - Output: one JSON object per stdout line
//! - UTF-8 only

use std::io::{self, BufRead, Write};

use super::errors::{CliError, CliResult};

/// Iterate raw request lines from stdin
///
/// Lines come back unparsed; request decoding happens downstream so
/// malformed JSON yields the client error shape, not a CLI failure.
pub fn read_lines() -> impl Iterator<Item = CliResult<String>> {
    let stdin = io::stdin();
    stdin
        .lock()
        .lines()
        .map(|line| line.map_err(CliError::from))
}

/// Write one JSON line to stdout
pub fn write_json(json_str: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", json_str)?;
    stdout.flush()?;

    Ok(())
}

//! Final status line rendering and process termination.

use std::process;

use vigil_core::PerfDataBuffer;

use crate::status::Status;

/// Render the plugin's single output line.
///
/// Newlines, carriage returns, and pipe characters are stripped from
/// the message first: a stray `|` would start the performance-data
/// section early, and a newline breaks the one-line contract the
/// supervisor parses.
#[must_use]
pub fn render(status: Status, message: &str, perfdata: &PerfDataBuffer) -> String {
    let message: String = message
        .chars()
        .filter(|c| !matches!(c, '\n' | '\r' | '|'))
        .collect();
    format!("{status}: {message}{perfdata}")
}

/// Print the status line to stdout and terminate the process with the
/// status exit code.
pub fn emit(status: Status, message: &str, perfdata: &PerfDataBuffer) -> ! {
    println!("{}", render(status, message, perfdata));
    process::exit(status.exit_code())
}

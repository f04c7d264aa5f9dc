//! CLI result reporting.
//!
//! Provides error printing, the build summary line, and exit code mapping.

use std::io::{self, Write};
use std::time::Duration;

use bootstrap::{log_status, Error, ErrorCode};

use crate::tty;

/// Exit status of the whole invocation for a failed command.
pub fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ValidationInvalidArgument => 2,

        // The self-build reports a generic failure, never the child's own status.
        ErrorCode::BootstrapCommandFailed => 1,

        ErrorCode::CommandFailed | ErrorCode::InternalIoError => 1,
    }
}

/// Print an error and its hints to stderr.
///
/// Bootstrap failures print nothing beyond a terminal-only status line; the
/// child has already reported its own diagnostics.
pub fn print_error(err: &Error) {
    if err.code == ErrorCode::BootstrapCommandFailed {
        if let Some(details) = err.command_details() {
            log_status!("bootstrap", "failed: {}", details.command);
        }
        return;
    }

    let stderr = io::stderr();
    let mut handle = stderr.lock();
    let _ = writeln!(handle, "x: {}{}", tty::error_label(), err.message);
    for hint in &err.hints {
        let _ = writeln!(handle, "x: {}{}", tty::note_label(), hint.message);
    }
}

/// `H:MM:SS`, the layout of the build summary line.
pub fn format_elapsed(elapsed: Duration) -> String {
    let delta = chrono::Duration::from_std(elapsed).unwrap_or_else(|_| chrono::Duration::zero());
    let total = delta.num_seconds();
    format!("{}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}

pub fn summary_line(exit_code: i32, elapsed: Duration) -> String {
    let outcome = if exit_code == 0 {
        "successfully"
    } else {
        "unsuccessfully"
    };

    format!(
        "Build completed {} in {}. Exit code: {}",
        outcome,
        format_elapsed(elapsed),
        exit_code
    )
}

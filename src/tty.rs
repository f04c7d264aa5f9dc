//! Terminal I/O utilities for CLI.
//!
//! Provides TTY detection and terminal-only emphasis.

use std::io::{self, IsTerminal};

pub fn is_stdout_tty() -> bool {
    io::stdout().is_terminal()
}

/// Print status message to stderr if running in a terminal.
pub fn status(message: &str) {
    if io::stderr().is_terminal() {
        eprintln!("{}", message);
    }
}

/// Bold red `error: ` prefix when stdout is a terminal, plain text otherwise.
pub fn error_label() -> &'static str {
    if is_stdout_tty() {
        "\u{1b}[1;31merror: \u{1b}[0m"
    } else {
        "error: "
    }
}

/// Bold yellow `note: ` prefix when stdout is a terminal, plain text otherwise.
pub fn note_label() -> &'static str {
    if is_stdout_tty() {
        "\u{1b}[1;33mnote: \u{1b}[0m"
    } else {
        "note: "
    }
}

/// Bold text when stdout is a terminal.
pub fn bold(text: &str) -> String {
    if is_stdout_tty() {
        format!("\u{1b}[1m{}\u{1b}[0m", text)
    } else {
        text.to_string()
    }
}

// log_status! macro is defined in lib.rs (#[macro_export]) and available crate-wide.

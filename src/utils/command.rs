//! Command execution primitives for read-only queries.
//!
//! These capture output and never fail loudly; callers that need to surface a
//! failing child use `core::runner` instead.

use std::path::Path;
use std::process::{Command, Output};

/// Run a command and return trimmed stdout, or `None` on any failure.
///
/// Failure covers spawn errors, non-zero exit and empty output.
pub fn run_optional(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    stdout_if_success(&output)
}

/// Run a command in a directory, returning `None` on failure instead of an error.
///
/// Useful when command failure is expected/acceptable (e.g., querying git outside a repository).
pub fn run_in_optional(dir: &Path, program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .output()
        .ok()?;

    stdout_if_success(&output)
}

fn stdout_if_success(output: &Output) -> Option<String> {
    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if stdout.is_empty() {
        None
    } else {
        Some(stdout)
    }
}

//! Launching external build commands.
//!
//! The runner never terminates the process. Failures come back as typed errors
//! and the dispatcher decides the exit code exactly once.

use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};

use crate::environment::Environment;
use crate::error::{CommandFailedDetails, Error, Result};

/// How a failure of the launched command is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunContext {
    /// Regular build step: failures carry the command line.
    Standard,
    /// Self-build of the build tooling: failures collapse to a generic exit status.
    Bootstrap,
}

impl RunContext {
    pub fn from_bootstrap(is_bootstrap: bool) -> Self {
        if is_bootstrap {
            RunContext::Bootstrap
        } else {
            RunContext::Standard
        }
    }
}

/// Reconstructed command line used in diagnostics.
pub fn command_line(argv: &[String]) -> String {
    argv.join(" ")
}

/// Append the platform executable suffix to `program` unless already present.
pub fn with_exe_suffix(program: &str, suffix: &str) -> String {
    if suffix.is_empty() || program.ends_with(suffix) {
        program.to_string()
    } else {
        format!("{}{}", program, suffix)
    }
}

/// Run `argv` with exactly `environment`, inheriting stdio, and wait for it.
///
/// Zero exit returns the status. Non-zero exit, termination by signal and
/// failure to launch are all errors; `context` selects which error.
pub fn run(argv: &[String], environment: &Environment, context: RunContext) -> Result<ExitStatus> {
    let (program, args) = argv.split_first().ok_or_else(|| {
        Error::validation_invalid_argument("argv", "command must name a program")
    })?;

    let command = command_line(argv);

    // Keep our own banner lines ahead of the child's output.
    io::stdout()
        .flush()
        .map_err(|e| Error::internal_io(e.to_string(), Some("flush stdout".to_string())))?;

    log_status!("run", "{}", command);

    let status = Command::new(with_exe_suffix(program, std::env::consts::EXE_SUFFIX))
        .args(args)
        .env_clear()
        .envs(environment)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status();

    let details = match status {
        Ok(status) if status.success() => return Ok(status),
        Ok(status) => CommandFailedDetails {
            command,
            exit_code: status.code(),
            launch_error: None,
        },
        Err(e) => CommandFailedDetails {
            command,
            exit_code: None,
            launch_error: Some(e.to_string()),
        },
    };

    Err(match context {
        RunContext::Standard => Error::command_failed(details),
        RunContext::Bootstrap => Error::bootstrap_command_failed(details),
    })
}

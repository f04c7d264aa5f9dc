//! Static checks: clippy lints and rustfmt verification.

use clap::Args;

use bootstrap::build::BuildStep;

use super::CmdResult;

#[derive(Args, Debug, Default)]
pub struct LintArgs {}

pub fn run_clippy(_args: LintArgs) -> CmdResult<BuildStep> {
    super::run_cargo_step(BuildStep::Clippy)
}

/// Checks formatting only; files are never rewritten.
pub fn run_rustfmt(_args: LintArgs) -> CmdResult<BuildStep> {
    super::run_cargo_step(BuildStep::Rustfmt)
}

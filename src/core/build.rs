use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use crate::config::BuildConf;
use crate::environment::{self, Environment};
use crate::error::Result;
use crate::identity::BuildIdentity;
use crate::runner::{self, RunContext};

// === Build Steps ===

/// One cargo invocation the launcher knows how to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildStep {
    /// `cargo build --release`
    Release,
    /// `cargo test`
    Test,
    /// `cargo clippy --workspace`
    Clippy,
    /// `cargo fmt --all -- --check`
    Rustfmt,
    /// `cargo build --manifest-path <path>`: self-build of the build tooling.
    Bootstrap { manifest_path: PathBuf },
}

impl BuildStep {
    pub fn argv(&self) -> Vec<String> {
        let args: Vec<String> = match self {
            BuildStep::Release => vec!["build".into(), "--release".into()],
            BuildStep::Test => vec!["test".into()],
            BuildStep::Clippy => vec!["clippy".into(), "--workspace".into()],
            BuildStep::Rustfmt => vec![
                "fmt".into(),
                "--all".into(),
                "--".into(),
                "--check".into(),
            ],
            BuildStep::Bootstrap { manifest_path } => vec![
                "build".into(),
                "--manifest-path".into(),
                manifest_path.to_string_lossy().into_owned(),
            ],
        };

        std::iter::once("cargo".to_string()).chain(args).collect()
    }

    /// Progress line printed before the step starts.
    pub fn banner(&self) -> &'static str {
        match self {
            BuildStep::Release => "compiling everything...",
            BuildStep::Test => "running tests...",
            BuildStep::Clippy => "running clippy...",
            BuildStep::Rustfmt => "running rustfmt...",
            BuildStep::Bootstrap { .. } => "building bootstrap tooling...",
        }
    }

    pub fn context(&self) -> RunContext {
        RunContext::from_bootstrap(matches!(self, BuildStep::Bootstrap { .. }))
    }

    /// Environment for this step: the identity overlay on `base`, plus the
    /// redirected target directory for the self-build.
    pub fn environment(
        &self,
        identity: &BuildIdentity,
        base: &Environment,
        conf: &BuildConf,
        root: &Path,
    ) -> Environment {
        let env = environment::build_environment(identity, base);
        match self {
            BuildStep::Bootstrap { .. } => {
                env.with(environment::CARGO_TARGET_DIR, conf.output_path(root))
            }
            _ => env,
        }
    }
}

// === Public API ===

/// Run a single step to completion.
pub fn run_step(
    step: &BuildStep,
    identity: &BuildIdentity,
    base: &Environment,
    conf: &BuildConf,
    root: &Path,
) -> Result<ExitStatus> {
    let env = step.environment(identity, base, conf, root);
    runner::run(&step.argv(), &env, step.context())
}

use std::path::PathBuf;

use clap::Args;

use bootstrap::build::BuildStep;
use bootstrap::Error;

use super::CmdResult;

#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Build the bootstrap tooling from this manifest instead of the project
    #[arg(long, value_name = "PATH")]
    pub manifest_path: Option<PathBuf>,
}

impl BuildArgs {
    fn step(self) -> bootstrap::Result<BuildStep> {
        match self.manifest_path {
            None => Ok(BuildStep::Release),
            Some(path) if path.as_os_str().is_empty() => Err(Error::validation_invalid_argument(
                "manifest-path",
                "manifest path must not be empty",
            )
            .with_hint("pass the path of the bootstrap tooling's Cargo.toml")),
            Some(manifest_path) => Ok(BuildStep::Bootstrap { manifest_path }),
        }
    }
}

pub fn run(args: BuildArgs) -> CmdResult<BuildStep> {
    super::run_cargo_step(args.step()?)
}

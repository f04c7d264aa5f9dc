use std::path::PathBuf;

use bootstrap::build::{self as steps, BuildStep};
use bootstrap::config::{self, BuildConf};
use bootstrap::environment::Environment;
use bootstrap::{identity, log_status, toolchain, Error};

pub type CmdResult<T> = bootstrap::Result<(T, i32)>;

pub mod build;
pub mod configure;
pub mod lint;

fn working_dir() -> bootstrap::Result<PathBuf> {
    std::env::current_dir().map_err(|e| {
        Error::internal_io(e.to_string(), Some("resolve working directory".to_string()))
    })
}

/// Shared driver for every cargo verb: prerequisite check, identity, then the
/// single cargo invocation for `step`.
pub(crate) fn run_cargo_step(step: BuildStep) -> CmdResult<BuildStep> {
    println!("stage 1: initializing build...");

    let base = Environment::from_process();
    if let Some(warning) = toolchain::check(&base) {
        eprintln!("{}", warning);
    }

    let root = working_dir()?;
    let identity = identity::resolve_in(&root);
    let conf = BuildConf::load(&config::config_path(&root));

    println!("stage 2: {}", step.banner());
    steps::run_step(&step, &identity, &base, &conf, &root)?;
    println!("done");

    Ok((step, 0))
}

pub(crate) fn run(command: crate::Commands) -> (bootstrap::Result<()>, i32) {
    crate::tty::status("x is working...");

    let result = match command {
        crate::Commands::Configure(args) => configure::run(args).map(|(_, code)| code),
        crate::Commands::Build(args) => build::run(args).map(|(_, code)| code),
        crate::Commands::Test(args) => test::run(args).map(|(_, code)| code),
        crate::Commands::Clippy(args) => lint::run_clippy(args).map(|(_, code)| code),
        crate::Commands::Rustfmt(args) => lint::run_rustfmt(args).map(|(_, code)| code),
        crate::Commands::External(verb) => {
            log_status!("dispatch", "unknown verb: {}", verb.join(" "));
            println!("x: unknown command. run `python ./x.py help` for help");
            Ok(0)
        }
    };

    match result {
        Ok(code) => (Ok(()), code),
        Err(err) => {
            let code = crate::output::exit_code_for_error(err.code);
            (Err(err), code)
        }
    }
}

use clap::Args;

use bootstrap::config::{self, ConfigureOutcome};
use bootstrap::log_status;

use super::CmdResult;

#[derive(Args, Debug, Default)]
pub struct ConfigureArgs {}

pub fn run(_args: ConfigureArgs) -> CmdResult<ConfigureOutcome> {
    let root = super::working_dir()?;

    println!("x: checking for existing build configuration file(s)");
    let outcome = config::configure(&root)?;

    match &outcome {
        ConfigureOutcome::AlreadyExists(_) => {
            println!(
                "x: {}one or more configuration file(s) already exist(s). exiting.",
                crate::tty::error_label()
            );
            println!(
                "x: {}if you want to reconfigure the build environment, run the `reconfigure` command.",
                crate::tty::note_label()
            );
        }
        ConfigureOutcome::Created(path) => {
            println!("x: creating build configuration file");
            log_status!("configure", "wrote {}", path.display());
            print_default_summary();
        }
    }

    // An existing file is reported, not treated as a failure.
    Ok((outcome, 0))
}

fn print_default_summary() {
    println!();
    println!("{}", crate::tty::bold("default configuration"));
    println!("  cache backend: postgres");
    println!("  load balancer: 1 server");
    println!("    - type: rest, address: 127.0.0.1:8000");
    println!();
}

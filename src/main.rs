use std::ffi::OsString;
use std::time::Instant;

use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod output;
mod tty;

use commands::{build, configure, lint, test};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "x")]
#[command(version = VERSION)]
#[command(about = "Bootstrap launcher for the HarTex build")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create buildconf.toml with the default configuration
    Configure(configure::ConfigureArgs),
    /// Compile everything in release mode
    #[command(visible_alias = "make")]
    Build(build::BuildArgs),
    /// Run the test suite
    Test(test::TestArgs),
    /// Run clippy over the workspace
    Clippy(lint::LintArgs),
    /// Check formatting with rustfmt
    Rustfmt(lint::LintArgs),
    #[command(external_subcommand)]
    External(Vec<String>),
}

impl Commands {
    /// Verbs that launch cargo and end with a build summary.
    fn is_cargo_verb(&self) -> bool {
        matches!(
            self,
            Commands::Build(_) | Commands::Test(_) | Commands::Clippy(_) | Commands::Rustfmt(_)
        )
    }
}

/// `help` as the first argument means `--help`, whatever follows it.
fn normalize_args(args: Vec<OsString>) -> Vec<OsString> {
    match args.get(1) {
        Some(first) if first == "help" => {
            args.into_iter().take(1).chain([OsString::from("--help")]).collect()
        }
        _ => args,
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse_from(normalize_args(std::env::args_os().collect()));

    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        println!();
        return std::process::ExitCode::SUCCESS;
    };

    let summarize = command.is_cargo_verb();
    let started = Instant::now();

    let (result, exit_code) = commands::run(command);

    if let Err(err) = &result {
        output::print_error(err);
    }

    if summarize {
        println!();
        println!("{}", output::summary_line(exit_code, started.elapsed()));
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}

//! End-to-end tests driving the compiled `x` binary.

use std::path::Path;
use std::process::{Command, Output};

fn x(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_x"))
        .args(args)
        .current_dir(dir)
        .env("HARTEX_IGNORE_OLD_TOOLCHAIN", "1")
        .output()
        .expect("failed to launch x")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_unknown_verb_prints_guidance_and_succeeds() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = x(dir.path(), &["frobnicate"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output)
        .contains("x: unknown command. run `python ./x.py help` for help"));
}

#[test]
fn test_reconfigure_is_unknown() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = x(dir.path(), &["reconfigure"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("x: unknown command."));
}

#[test]
fn test_no_verb_prints_help() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = x(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("configure"));
    assert!(out.contains("rustfmt"));
}

#[test]
fn test_help_verb_succeeds() {
    let dir = tempfile::tempdir().expect("tempdir");
    for args in [&["help"][..], &["--help"], &["-h"]] {
        assert_eq!(x(dir.path(), args).status.code(), Some(0), "args: {:?}", args);
    }
}

#[test]
fn test_help_ignores_trailing_arguments() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = x(dir.path(), &["help", "frobnicate"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("configure"));
}

#[test]
fn test_configure_twice() {
    let dir = tempfile::tempdir().expect("tempdir");

    let first = x(dir.path(), &["configure"]);
    assert_eq!(first.status.code(), Some(0));
    assert!(stdout(&first).contains("x: creating build configuration file"));

    let conf = dir.path().join("buildconf.toml");
    let written = std::fs::read_to_string(&conf).expect("buildconf.toml created");
    assert_eq!(written.lines().count(), 7);

    let second = x(dir.path(), &["configure"]);
    assert_eq!(second.status.code(), Some(0));
    let out = stdout(&second);
    assert!(out.contains("one or more configuration file(s) already exist(s). exiting."));
    assert!(out.contains("run the `reconfigure` command."));
    assert_eq!(std::fs::read_to_string(&conf).expect("reread"), written);
}

#[test]
fn test_empty_manifest_path_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = x(dir.path(), &["build", "--manifest-path", ""]);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_failing_build_reports_command_and_summary() {
    // No Cargo.toml in the directory, so cargo itself fails.
    let dir = tempfile::tempdir().expect("tempdir");
    let output = x(dir.path(), &["test"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("cargo test"));

    let out = stdout(&output);
    assert!(out.contains("stage 1: initializing build..."));
    assert!(out.contains("stage 2: running tests..."));
    assert!(out.contains("Build completed unsuccessfully in "));
    assert!(out.contains("Exit code: 1"));
}

#[test]
fn test_failing_bootstrap_build_exits_with_one() {
    let dir = tempfile::tempdir().expect("tempdir");
    let manifest = dir.path().join("missing").join("Cargo.toml");
    let output = x(
        dir.path(),
        &["make", "--manifest-path", manifest.to_str().expect("utf-8 path")],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("stage 2: building bootstrap tooling..."));
}

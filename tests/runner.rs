//! Integration tests for launching child processes.

#![cfg(unix)]

use bootstrap::environment::{self, Environment};
use bootstrap::identity::{BuildIdentity, Channel};
use bootstrap::runner::{self, RunContext};
use bootstrap::ErrorCode;

fn sh(script: &str) -> Vec<String> {
    vec!["sh".to_string(), "-c".to_string(), script.to_string()]
}

#[test]
fn test_zero_exit_is_ok() {
    let status = runner::run(&sh("exit 0"), &Environment::from_process(), RunContext::Standard)
        .expect("exit 0 should succeed");
    assert!(status.success());
}

#[test]
fn test_non_zero_exit_carries_command_line() {
    let err = runner::run(&sh("exit 2"), &Environment::from_process(), RunContext::Standard)
        .expect_err("exit 2 should fail");

    assert_eq!(err.code, ErrorCode::CommandFailed);
    assert!(err.message.contains("sh -c exit 2"), "message: {}", err.message);

    let details = err.command_details().expect("command details");
    assert_eq!(details.exit_code, Some(2));
}

#[test]
fn test_bootstrap_failure_is_generic() {
    let err = runner::run(&sh("exit 2"), &Environment::from_process(), RunContext::Bootstrap)
        .expect_err("exit 2 should fail");

    assert_eq!(err.code, ErrorCode::BootstrapCommandFailed);
    assert!(!err.message.contains("exit 2"));
    assert_eq!(err.command_details().and_then(|d| d.exit_code), Some(2));
}

#[test]
fn test_child_sees_identity_environment() {
    let identity = BuildIdentity {
        channel: Channel::Nightly,
        commit_date: "2024-01-15".to_string(),
        commit_hash_short: "abc123def".to_string(),
    };
    let env = environment::build_environment(&identity, &Environment::from_process());

    let script = r#"[ "$CFG_IS_STABLE" = "false" ] && [ "$CFG_VERSION_STR" = "1.27.0-nightly (abc123def 2024-01-15)" ]"#;
    runner::run(&sh(script), &env, RunContext::Standard).expect("child should see overlay");
}

#[test]
fn test_child_does_not_inherit_unlisted_variables() {
    let env = Environment::new().with("PATH", std::env::var_os("PATH").unwrap_or_default());

    // HOME is set for any test process but absent from the explicit map.
    runner::run(&sh(r#"[ -z "$HOME" ]"#), &env, RunContext::Standard)
        .expect("child environment should be exactly the given map");
}

//! Prerequisite check for the cargo toolchain driving the build.

use regex::Regex;
use semver::Version;

use crate::environment::Environment;
use crate::utils::command;

/// Oldest cargo release the build is known to work with.
pub const MINIMUM_CARGO: Version = Version::new(1, 74, 0);

/// Setting either variable to `1` silences the outdated-toolchain warning.
pub const IGNORE_OLD_TOOLCHAIN: &str = "HARTEX_IGNORE_OLD_TOOLCHAIN";
pub const IGNORE_OLD_PYTHON: &str = "HARTEX_IGNORE_OLD_PYTHON";

/// Extract the version from `cargo --version` output, e.g.
/// `cargo 1.75.0 (1d8b05cdd 2023-11-20)` or `cargo 1.77.0-nightly (...)`.
pub fn parse_cargo_version(output: &str) -> Option<Version> {
    let re = Regex::new(r"^cargo (\d+\.\d+\.\d+(?:-[0-9A-Za-z.-]+)?)").ok()?;
    let captures = re.captures(output.trim())?;
    Version::parse(captures.get(1)?.as_str()).ok()
}

pub fn is_warning_suppressed(environment: &Environment) -> bool {
    [IGNORE_OLD_TOOLCHAIN, IGNORE_OLD_PYTHON]
        .iter()
        .any(|key| environment.get_str(key) == Some("1"))
}

/// Warning text for `installed`, or `None` when it meets [`MINIMUM_CARGO`].
///
/// Pre-releases of the minimum version count as satisfying it.
pub fn outdated_warning(installed: &Version) -> Option<String> {
    let comparable = Version::new(installed.major, installed.minor, installed.patch);
    if comparable >= MINIMUM_CARGO {
        return None;
    }

    Some(format!(
        "x: warning: cargo {} is older than the minimum supported version {}. \
         set {}=1 to silence this warning.",
        installed, MINIMUM_CARGO, IGNORE_OLD_TOOLCHAIN
    ))
}

/// Query the installed cargo and return a warning if it is too old.
///
/// A missing or unparsable cargo is not reported here; launching the build
/// command surfaces that failure.
pub fn check(environment: &Environment) -> Option<String> {
    if is_warning_suppressed(environment) {
        return None;
    }

    let output = command::run_optional("cargo", &["--version"])?;
    let installed = parse_cargo_version(&output)?;
    outdated_warning(&installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_release_version() {
        assert_eq!(
            parse_cargo_version("cargo 1.75.0 (1d8b05cdd 2023-11-20)"),
            Some(Version::new(1, 75, 0))
        );
    }

    #[test]
    fn parses_nightly_version() {
        let version = parse_cargo_version("cargo 1.77.0-nightly (7bb7b5395 2024-01-20)").unwrap();
        assert_eq!((version.major, version.minor, version.patch), (1, 77, 0));
        assert_eq!(version.pre.as_str(), "nightly");
    }

    #[test]
    fn rejects_unrelated_output() {
        assert_eq!(parse_cargo_version("rustc 1.75.0"), None);
        assert_eq!(parse_cargo_version(""), None);
    }

    #[test]
    fn warns_only_below_minimum() {
        assert!(outdated_warning(&Version::new(1, 60, 0)).is_some());
        assert!(outdated_warning(&MINIMUM_CARGO).is_none());
        assert!(outdated_warning(&Version::new(1, 80, 2)).is_none());
        assert!(outdated_warning(&Version::parse("1.74.0-nightly").unwrap()).is_none());
    }

    #[test]
    fn warning_names_opt_out_variable() {
        let warning = outdated_warning(&Version::new(1, 60, 0)).unwrap();
        assert!(warning.contains("1.60.0"));
        assert!(warning.contains(IGNORE_OLD_TOOLCHAIN));
    }

    #[test]
    fn opt_out_variables() {
        assert!(!is_warning_suppressed(&Environment::new()));
        assert!(is_warning_suppressed(
            &Environment::new().with(IGNORE_OLD_TOOLCHAIN, "1")
        ));
        assert!(is_warning_suppressed(
            &Environment::new().with(IGNORE_OLD_PYTHON, "1")
        ));
        assert!(!is_warning_suppressed(
            &Environment::new().with(IGNORE_OLD_TOOLCHAIN, "0")
        ));
    }

    #[test]
    fn check_is_silent_when_suppressed() {
        let env = Environment::new().with(IGNORE_OLD_TOOLCHAIN, "1");
        assert!(check(&env).is_none());
    }
}

//! `buildconf.toml`: first-time creation and the single key the launcher reads.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;
use crate::utils::io;

pub const CONFIG_FILE_NAME: &str = "buildconf.toml";

/// Output directory used when `[build] output-dir` is not configured.
pub const DEFAULT_OUTPUT_DIR: &str = "build";

/// Content written by `configure`.
pub const DEFAULT_TEMPLATE: &str = r#"[cache]
backend = "postgres"

[loadbal]
servers = [
    { type = "rest", address = "127.0.0.1:8000" }
]
"#;

/// The slice of `buildconf.toml` the launcher understands. Other sections are
/// owned by the build itself and ignored here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuildConf {
    #[serde(default)]
    pub build: Option<BuildSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuildSection {
    #[serde(default, rename = "output-dir")]
    pub output_dir: Option<String>,
}

impl BuildConf {
    /// Parse configuration text. Malformed text yields the defaults.
    pub fn parse(content: &str) -> Self {
        toml::from_str(content).unwrap_or_default()
    }

    /// Load from `path`. A missing or unreadable file yields the defaults.
    pub fn load(path: &Path) -> Self {
        io::read_file(path, "read build configuration")
            .map(|content| Self::parse(&content))
            .unwrap_or_default()
    }

    /// Configured output directory, or [`DEFAULT_OUTPUT_DIR`].
    pub fn output_dir(&self) -> &str {
        self.build
            .as_ref()
            .and_then(|build| build.output_dir.as_deref())
            .unwrap_or(DEFAULT_OUTPUT_DIR)
    }

    /// Output directory as an absolute path: `~` expanded, relative paths
    /// resolved against `root`.
    pub fn output_path(&self, root: &Path) -> PathBuf {
        let expanded = shellexpand::tilde(self.output_dir());
        let path = PathBuf::from(expanded.as_ref());
        if path.is_absolute() {
            path
        } else {
            root.join(path)
        }
    }
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigureOutcome {
    Created(PathBuf),
    AlreadyExists(PathBuf),
}

/// Write [`DEFAULT_TEMPLATE`] to `<root>/buildconf.toml` unless it already exists.
///
/// An existing file is never modified.
pub fn configure(root: &Path) -> Result<ConfigureOutcome> {
    let path = config_path(root);
    if path.exists() {
        return Ok(ConfigureOutcome::AlreadyExists(path));
    }

    io::write_new_file(&path, DEFAULT_TEMPLATE, "create build configuration")?;
    Ok(ConfigureOutcome::Created(path))
}

//! Build identity: which release channel is being built, from which commit.
//!
//! The identity is resolved once per invocation from git metadata and is
//! read-only afterwards. Resolution never fails; missing metadata degrades to
//! empty fields and the Nightly channel.

use std::fmt;
use std::path::Path;

use semver::Version;

use crate::git;

/// Width of the abbreviated commit hash embedded in version strings.
pub const SHORT_HASH_LEN: usize = 9;

/// Release track the current branch builds for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Stable,
    Nightly,
}

impl Channel {
    /// Select the channel for a branch name.
    ///
    /// Only the exact (case-sensitive, untrimmed) name `stable` maps to Stable;
    /// feature branches, detached HEADs and unknown state all map to Nightly.
    pub fn from_branch(branch: &str) -> Self {
        match branch {
            "stable" => Channel::Stable,
            _ => Channel::Nightly,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Stable => "stable",
            Channel::Nightly => "nightly",
        }
    }

    pub fn is_stable(&self) -> bool {
        matches!(self, Channel::Stable)
    }

    /// Version number released on this channel.
    pub fn version(&self) -> Version {
        match self {
            Channel::Stable => Version::new(1, 26, 0),
            Channel::Nightly => Version::new(1, 27, 0),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildIdentity {
    pub channel: Channel,
    /// Short committer date of HEAD; empty without commits.
    pub commit_date: String,
    /// Abbreviated HEAD hash; empty without commits.
    pub commit_hash_short: String,
}

impl BuildIdentity {
    /// `<version>-<channel> (<hash> <date>)`, consumed verbatim by the build as
    /// `CFG_VERSION_STR`. Empty hash or date render as empty segments.
    pub fn version_string(&self) -> String {
        format!(
            "{}-{} ({} {})",
            self.channel.version(),
            self.channel.as_str(),
            self.commit_hash_short,
            self.commit_date
        )
    }
}

/// Resolve the identity of the repository rooted at the working directory.
pub fn resolve() -> BuildIdentity {
    resolve_in(Path::new("."))
}

pub fn resolve_in(repo_dir: &Path) -> BuildIdentity {
    let branch = git::current_branch(repo_dir).unwrap_or_default();
    let identity = BuildIdentity {
        channel: Channel::from_branch(&branch),
        commit_date: git::last_commit_date(repo_dir).unwrap_or_default(),
        commit_hash_short: git::short_head_hash(repo_dir, SHORT_HASH_LEN).unwrap_or_default(),
    };

    log_status!(
        "identity",
        "branch '{}' -> {} ({})",
        branch,
        identity.channel,
        identity.version_string()
    );

    identity
}

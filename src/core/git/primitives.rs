use std::path::Path;

use crate::utils::command;

/// Name of the checked-out branch.
///
/// Returns None outside a repository, on a detached HEAD, or when git is unavailable.
pub fn current_branch(repo_dir: &Path) -> Option<String> {
    command::run_in_optional(repo_dir, "git", &["branch", "--show-current"])
}

/// Short (`YYYY-MM-DD`) committer date of the most recent commit.
pub fn last_commit_date(repo_dir: &Path) -> Option<String> {
    command::run_in_optional(
        repo_dir,
        "git",
        &["log", "-1", "--date=short", "--pretty=format:%cd"],
    )
}

/// Abbreviated hash of HEAD with a fixed width, so identities stay comparable
/// across repositories of different sizes.
pub fn short_head_hash(repo_dir: &Path, width: usize) -> Option<String> {
    let short = format!("--short={}", width);
    command::run_in_optional(repo_dir, "git", &["rev-parse", short.as_str(), "HEAD"])
}

//! Core types for create-pull-request

use std::fmt;

/// Name of a generated head branch: `<prefix>-<suffix>`
///
/// In short-commit-hash mode the name is a pure function of HEAD, which
/// makes it the idempotency key for a run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BranchName(String);

impl BranchName {
    /// Join a prefix and suffix with `-`
    pub fn new(prefix: &str, suffix: &str) -> Self {
        Self(format!("{prefix}-{suffix}"))
    }

    /// Borrow the branch name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Commit author identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
}

/// Modified and untracked paths in a working tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingTreeStatus {
    /// Tracked paths with staged or unstaged modifications
    pub modified: Vec<String>,
    /// Untracked paths
    pub untracked: Vec<String>,
}

impl WorkingTreeStatus {
    /// Whether there is anything to commit
    pub fn is_dirty(&self) -> bool {
        !self.modified.is_empty() || !self.untracked.is_empty()
    }
}

/// Parameters for opening a pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRequest {
    /// PR title
    pub title: String,
    /// PR body (markdown)
    pub body: String,
    /// Branch the changes merge into
    pub base: String,
    /// Branch carrying the changes
    pub head: String,
}

/// A pull request as returned by the hosting API
#[derive(Debug, Clone)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// Web URL for the PR
    pub html_url: String,
    /// Base branch name
    pub base_ref: String,
    /// Head branch name
    pub head_ref: String,
    /// PR title
    pub title: String,
}

/// Repository coordinates on the hosting service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// REST API base URL
    pub api_url: String,
}

//! Head branch naming

use crate::error::Result;
use crate::repo::Repository;
use crate::types::BranchName;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use std::fmt;

/// How the generated branch name is made unique
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SuffixMode {
    /// Abbreviated hash of HEAD; reruns on the same commit reuse the name
    #[default]
    ShortCommitHash,
    /// Seconds since the Unix epoch; every run gets a new name
    Timestamp,
}

impl fmt::Display for SuffixMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShortCommitHash => f.write_str("short-commit-hash"),
            Self::Timestamp => f.write_str("timestamp"),
        }
    }
}

/// Derive the head branch name for this run
pub fn derive_branch(
    prefix: &str,
    mode: SuffixMode,
    repo: &dyn Repository,
) -> Result<BranchName> {
    derive_branch_at(prefix, mode, repo, Utc::now())
}

/// Derive the head branch name, using `now` for the timestamp suffix
///
/// Timestamp names are not idempotent: a rerun against the same commit
/// gets a different name and therefore a second pull request.
pub fn derive_branch_at(
    prefix: &str,
    mode: SuffixMode,
    repo: &dyn Repository,
    now: DateTime<Utc>,
) -> Result<BranchName> {
    let suffix = match mode {
        SuffixMode::Timestamp => now.timestamp().to_string(),
        SuffixMode::ShortCommitHash => repo.head_short_sha()?,
    };
    Ok(BranchName::new(prefix, &suffix))
}

/// Whether `base` is itself a branch generated with `prefix`
///
/// Runs on generated branches are skipped so one pull request never
/// spawns another.
pub fn is_action_branch(base: &str, prefix: &str) -> bool {
    base.starts_with(prefix)
}

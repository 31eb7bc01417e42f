//! Working-copy access
//!
//! The pipeline only talks to version control through [`Repository`], so
//! the gates and the publisher can run against an in-memory double in tests.

mod git;

pub use git::GitRepository;

use crate::auth::HttpCredential;
use crate::error::Result;
use crate::types::{Author, BranchName, WorkingTreeStatus};

/// Version-control capability used by the pipeline
pub trait Repository {
    /// Abbreviated hash of HEAD
    fn head_short_sha(&self) -> Result<String>;

    /// Modified and untracked files in the working tree
    fn status(&self) -> Result<WorkingTreeStatus>;

    /// Cached remote-tracking branches of `remote`, as `<remote>/<name>`
    ///
    /// Reads local refs only; no fetch is performed.
    fn remote_branches(&self, remote: &str) -> Result<Vec<String>>;

    /// Use `author` as committer identity for later operations on this handle
    fn set_identity(&mut self, author: &Author);

    /// Create a branch at HEAD and check it out
    fn create_branch(&mut self, branch: &BranchName) -> Result<()>;

    /// Stage every change, including untracked files
    fn stage_all(&mut self) -> Result<()>;

    /// Commit the index
    fn commit(&mut self, message: &str) -> Result<()>;

    /// Push `branch` to `remote` and set it as upstream
    fn push_branch(
        &mut self,
        remote: &str,
        branch: &BranchName,
        credential: &HttpCredential,
    ) -> Result<()>;
}

/// Whether `<remote>/<branch>` exists among cached remote-tracking refs
///
/// Only what the last fetch recorded is consulted, so the answer can be
/// stale by one fetch interval.
pub fn remote_branch_exists(
    repo: &dyn Repository,
    remote: &str,
    branch: &BranchName,
) -> Result<bool> {
    let wanted = format!("{remote}/{branch}");
    Ok(repo.remote_branches(remote)?.iter().any(|r| *r == wanted))
}

/// Whether the working tree has modified or untracked files
pub fn has_changes(repo: &dyn Repository) -> Result<bool> {
    Ok(repo.status()?.is_dirty())
}

//! In-memory `Repository` for pipeline tests

#![allow(dead_code)]

use create_pull_request::auth::HttpCredential;
use create_pull_request::error::{Error, Result};
use create_pull_request::repo::Repository;
use create_pull_request::types::{Author, BranchName, WorkingTreeStatus};

/// A mutating call made against the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoOp {
    SetIdentity(Author),
    CreateBranch(String),
    StageAll,
    Commit(String),
    Push { remote: String, branch: String },
}

/// Repository double with a fixed HEAD, status and remote refs
///
/// A successful push records `<remote>/<branch>` as a remote-tracking
/// branch, like `git push --set-upstream` does.
pub struct MockRepository {
    head: String,
    status: WorkingTreeStatus,
    remote_branches: Vec<String>,
    ops: Vec<RepoOp>,
    error_on_push: Option<String>,
}

impl MockRepository {
    /// Clean working tree at `head`, with only `origin/main` on the remote
    pub fn new(head: &str) -> Self {
        Self {
            head: head.to_string(),
            status: WorkingTreeStatus::default(),
            remote_branches: vec!["origin/main".to_string()],
            ops: Vec::new(),
            error_on_push: None,
        }
    }

    /// Add a modified tracked file
    pub fn with_modified(mut self, path: &str) -> Self {
        self.status.modified.push(path.to_string());
        self
    }

    /// Add an untracked file
    pub fn with_untracked(mut self, path: &str) -> Self {
        self.status.untracked.push(path.to_string());
        self
    }

    /// Add a cached remote-tracking branch, e.g. `origin/feature`
    pub fn with_remote_branch(mut self, name: &str) -> Self {
        self.remote_branches.push(name.to_string());
        self
    }

    /// Make `push_branch` return an error
    pub fn fail_push(&mut self, msg: &str) {
        self.error_on_push = Some(msg.to_string());
    }

    /// Mutating calls in order
    pub fn ops(&self) -> &[RepoOp] {
        &self.ops
    }

    /// Assert nothing was changed
    pub fn assert_untouched(&self) {
        assert!(self.ops.is_empty(), "Expected no repository changes but got: {:?}", self.ops);
    }
}

impl Repository for MockRepository {
    fn head_short_sha(&self) -> Result<String> {
        Ok(self.head.clone())
    }

    fn status(&self) -> Result<WorkingTreeStatus> {
        Ok(self.status.clone())
    }

    fn remote_branches(&self, remote: &str) -> Result<Vec<String>> {
        let prefix = format!("{remote}/");
        Ok(self
            .remote_branches
            .iter()
            .filter(|b| b.starts_with(&prefix))
            .cloned()
            .collect())
    }

    fn set_identity(&mut self, author: &Author) {
        self.ops.push(RepoOp::SetIdentity(author.clone()));
    }

    fn create_branch(&mut self, branch: &BranchName) -> Result<()> {
        self.ops.push(RepoOp::CreateBranch(branch.to_string()));
        Ok(())
    }

    fn stage_all(&mut self) -> Result<()> {
        self.ops.push(RepoOp::StageAll);
        Ok(())
    }

    fn commit(&mut self, message: &str) -> Result<()> {
        self.ops.push(RepoOp::Commit(message.to_string()));
        self.status = WorkingTreeStatus::default();
        Ok(())
    }

    fn push_branch(
        &mut self,
        remote: &str,
        branch: &BranchName,
        _credential: &HttpCredential,
    ) -> Result<()> {
        self.ops.push(RepoOp::Push {
            remote: remote.to_string(),
            branch: branch.to_string(),
        });

        if let Some(msg) = &self.error_on_push {
            return Err(Error::Git {
                command: "push".to_string(),
                message: msg.clone(),
            });
        }

        self.remote_branches.push(format!("{remote}/{branch}"));
        Ok(())
    }
}

//! `Repository` backed by the git CLI

use crate::auth::HttpCredential;
use crate::error::{Error, Result};
use crate::repo::Repository;
use crate::types::{Author, BranchName, WorkingTreeStatus};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Prefix of remote-tracking refs
const REMOTE_REFS: &str = "refs/remotes/";

/// A git working copy driven through `git` subprocesses
///
/// Committer identity set via [`Repository::set_identity`] is passed as
/// `-c user.name=... -c user.email=...` on each invocation, so global and
/// repository config are left untouched.
#[derive(Debug)]
pub struct GitRepository {
    workdir: PathBuf,
    identity: Option<Author>,
}

impl GitRepository {
    /// Handle for the working copy at `path`
    ///
    /// No git command runs until the handle is first used.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            workdir: path.into(),
            identity: None,
        }
    }

    /// Root of the working copy
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Fetch/push URL configured for `remote`
    pub fn remote_url(&self, remote: &str) -> Result<String> {
        self.git(&["remote", "get-url", remote])
    }

    /// `-c` overrides that authenticate a push to `remote`
    pub fn push_config(
        &self,
        remote: &str,
        credential: &HttpCredential,
    ) -> Result<Vec<(String, String)>> {
        Ok(credential.git_config(&self.remote_url(remote)?))
    }

    fn git(&self, args: &[&str]) -> Result<String> {
        self.git_with_config(&[], args)
    }

    fn git_with_config(&self, config: &[(String, String)], args: &[&str]) -> Result<String> {
        let mut cmd = Command::new("git");
        cmd.current_dir(&self.workdir);

        if let Some(author) = &self.identity {
            cmd.arg("-c").arg(format!("user.name={}", author.name));
            cmd.arg("-c").arg(format!("user.email={}", author.email));
        }
        for (key, value) in config {
            cmd.arg("-c").arg(format!("{key}={value}"));
        }
        cmd.args(args);

        // Only the subcommand arguments are logged; -c values may hold secrets
        debug!("git {}", args.join(" "));
        let output = cmd.output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = if stderr.trim().is_empty() {
                String::from_utf8_lossy(&output.stdout).trim().to_string()
            } else {
                stderr.trim().to_string()
            };
            return Err(Error::Git {
                command: args.first().copied().unwrap_or_default().to_string(),
                message,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
    }
}

impl Repository for GitRepository {
    fn head_short_sha(&self) -> Result<String> {
        self.git(&["rev-parse", "--short", "HEAD"])
    }

    fn status(&self) -> Result<WorkingTreeStatus> {
        let output = self.git(&["status", "--porcelain", "--untracked-files=all"])?;
        Ok(parse_porcelain_status(&output))
    }

    fn remote_branches(&self, remote: &str) -> Result<Vec<String>> {
        let pattern = format!("{REMOTE_REFS}{remote}/");
        let output = self.git(&["for-each-ref", "--format=%(refname)", &pattern])?;
        Ok(output
            .lines()
            .filter_map(|line| line.strip_prefix(REMOTE_REFS))
            .map(ToString::to_string)
            .collect())
    }

    fn set_identity(&mut self, author: &Author) {
        self.identity = Some(author.clone());
    }

    fn create_branch(&mut self, branch: &BranchName) -> Result<()> {
        self.git(&["checkout", "-b", branch.as_str()])?;
        Ok(())
    }

    fn stage_all(&mut self) -> Result<()> {
        self.git(&["add", "-A"])?;
        Ok(())
    }

    fn commit(&mut self, message: &str) -> Result<()> {
        self.git(&["commit", "-m", message])?;
        Ok(())
    }

    fn push_branch(
        &mut self,
        remote: &str,
        branch: &BranchName,
        credential: &HttpCredential,
    ) -> Result<()> {
        let config = self.push_config(remote, credential)?;
        self.git_with_config(&config, &["push", "--set-upstream", remote, branch.as_str()])?;
        Ok(())
    }
}

/// Split `git status --porcelain` (v1) output into modified and untracked paths
fn parse_porcelain_status(output: &str) -> WorkingTreeStatus {
    let mut status = WorkingTreeStatus::default();

    for line in output.lines() {
        if line.len() < 4 {
            continue;
        }
        let (code, path) = line.split_at(3);
        if code.starts_with("??") {
            status.untracked.push(path.to_string());
        } else if !code.starts_with("!!") {
            status.modified.push(path.to_string());
        }
    }

    status
}

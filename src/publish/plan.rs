//! Skip conditions and publish planning
//!
//! Evaluates, in order and exactly once each: the event filter, the
//! generated-branch check on the base, the remote branch lookup and the
//! working-tree check. The first condition that holds ends the run.

use crate::branch::{derive_branch, is_action_branch};
use crate::config::Config;
use crate::error::Result;
use crate::event::{IgnoreReason, TriggerEvent, ignore_reason};
use crate::repo::{Repository, has_changes, remote_branch_exists};
use crate::types::{BranchName, PullRequestRequest};
use std::fmt;
use tracing::{debug, info};

/// Why a run ended without publishing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The event filter rejected the trigger
    IgnoredEvent(IgnoreReason),
    /// The base branch was itself generated by a previous run
    CreatedByAction {
        /// The base branch
        base: String,
    },
    /// The head branch already exists on the remote
    BranchExists {
        /// The derived head branch
        branch: BranchName,
    },
    /// The working tree has no modified or untracked files
    NoChanges,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IgnoredEvent(reason) => write!(f, "Ignoring {reason}"),
            Self::CreatedByAction { base } => {
                write!(f, "Branch '{base}' was created by this action")
            }
            Self::BranchExists { branch } => write!(
                f,
                "Pull request branch '{branch}' already exists for this commit"
            ),
            Self::NoChanges => write!(f, "Repository has no modified or untracked files"),
        }
    }
}

/// Everything needed to publish, decided before any side effect
#[derive(Debug, Clone)]
pub struct PublishPlan {
    /// Head branch to create
    pub branch: BranchName,
    /// Base branch the PR targets
    pub base: String,
    /// Remote to push to
    pub remote: String,
    /// Commit message
    pub commit_message: String,
    /// Pull request to open once the branch is pushed
    pub request: PullRequestRequest,
}

/// Outcome of the skip conditions
#[derive(Debug, Clone)]
pub enum Decision {
    /// Stop the run
    Skip(SkipReason),
    /// Proceed to publishing
    Publish(PublishPlan),
}

/// Evaluate the skip conditions and build the publish plan
pub fn plan_run(config: &Config, event: &TriggerEvent, repo: &dyn Repository) -> Result<Decision> {
    if config.skip_ignore {
        debug!("Event filter bypassed");
    } else if let Some(reason) = ignore_reason(event)? {
        info!("Ignoring {} event: {reason}", event.name);
        return Ok(Decision::Skip(SkipReason::IgnoredEvent(reason)));
    }

    let base = config.base_branch()?;
    if is_action_branch(&base, &config.branch) {
        info!("Base branch {base} starts with {}", config.branch);
        return Ok(Decision::Skip(SkipReason::CreatedByAction { base }));
    }

    let branch = derive_branch(&config.branch, config.branch_suffix, repo)?;
    debug!("Derived branch {branch} ({} suffix)", config.branch_suffix);

    if remote_branch_exists(repo, &config.remote, &branch)? {
        info!("Remote branch {}/{branch} already exists", config.remote);
        return Ok(Decision::Skip(SkipReason::BranchExists { branch }));
    }

    if !has_changes(repo)? {
        info!("Working tree is clean");
        return Ok(Decision::Skip(SkipReason::NoChanges));
    }

    let request = PullRequestRequest {
        title: config.title.clone(),
        body: config.body.clone(),
        base: base.clone(),
        head: branch.to_string(),
    };

    Ok(Decision::Publish(PublishPlan {
        branch,
        base,
        remote: config.remote.clone(),
        commit_message: config.commit_message.clone(),
        request,
    }))
}

//! Progress callback trait for interface-agnostic updates
//!
//! Lets the CLI (or a test) observe the run without the pipeline knowing
//! how output is rendered.

use crate::error::Error;
use crate::publish::SkipReason;
use crate::types::{BranchName, PullRequest};
use async_trait::async_trait;
use std::fmt;

/// Pipeline phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Evaluating the skip conditions
    Checking,
    /// Creating the branch and committing
    Committing,
    /// Pushing the branch to the remote
    Pushing,
    /// Opening the pull request
    CreatingPr,
    /// Run complete
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checking => write!(f, "Checking"),
            Self::Committing => write!(f, "Committing changes"),
            Self::Pushing => write!(f, "Pushing"),
            Self::CreatingPr => write!(f, "Creating pull request"),
            Self::Complete => write!(f, "Done"),
        }
    }
}

/// Push operation status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushStatus {
    /// Push started
    Started,
    /// Push succeeded
    Success,
    /// Push failed with error message
    Failed(String),
}

impl fmt::Display for PushStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started => write!(f, "pushing"),
            Self::Success => write!(f, "pushed"),
            Self::Failed(msg) => write!(f, "failed: {msg}"),
        }
    }
}

/// Progress callback trait
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called when the run stops at a skip condition
    async fn on_skip(&self, reason: &SkipReason);

    /// Called when the branch is being pushed
    async fn on_push(&self, branch: &BranchName, status: PushStatus);

    /// Called when the PR is created
    async fn on_pr_created(&self, pr: &PullRequest);

    /// Called when a step fails, before the error is returned
    async fn on_error(&self, error: &Error);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_skip(&self, _reason: &SkipReason) {}
    async fn on_push(&self, _branch: &BranchName, _status: PushStatus) {}
    async fn on_pr_created(&self, _pr: &PullRequest) {}
    async fn on_error(&self, _error: &Error) {}
    async fn on_message(&self, _message: &str) {}
}

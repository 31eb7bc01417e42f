//! Event filter
//!
//! Decides whether a trigger event should be ignored outright. Only push
//! events are ever ignored: branch deletions (closing a generated PR and
//! deleting its branch fires a push that would otherwise spawn another PR
//! on the same commit) and pushes to tags or remote refs.

use crate::config::BRANCH_REF_PREFIX;
use crate::error::Result;
use crate::event::TriggerEvent;
use std::fmt;

/// Why an event was ignored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The pushed ref was deleted
    BranchDeleted,
    /// The pushed ref is not under `refs/heads/`
    NotABranch(String),
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BranchDeleted => write!(f, "delete branch event"),
            Self::NotABranch(r) => write!(f, "`{r}` is not a branch (tags and remotes are ignored)"),
        }
    }
}

/// Reason to ignore `event`, if any
pub fn ignore_reason(event: &TriggerEvent) -> Result<Option<IgnoreReason>> {
    if !event.is_push() {
        return Ok(None);
    }

    if event.field::<bool>(&["deleted"])? {
        return Ok(Some(IgnoreReason::BranchDeleted));
    }

    let git_ref: String = event.field(&["ref"])?;
    if !git_ref.starts_with(BRANCH_REF_PREFIX) {
        return Ok(Some(IgnoreReason::NotABranch(git_ref)));
    }

    Ok(None)
}

/// Whether `event` should be ignored
pub fn should_ignore(event: &TriggerEvent) -> Result<bool> {
    Ok(ignore_reason(event)?.is_some())
}

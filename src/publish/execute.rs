//! Publish execution
//!
//! Performs the side effects in order. Each step must succeed before the
//! next starts, and nothing is rolled back: a pushed branch stays pushed
//! even if opening the pull request fails afterwards.

use crate::auth::HttpCredential;
use crate::error::Result;
use crate::event::{TriggerEvent, resolve_author};
use crate::platform::PlatformService;
use crate::publish::{Phase, ProgressCallback, PublishPlan, PushStatus};
use crate::repo::Repository;
use crate::types::PullRequest;
use tracing::info;

/// Execute a publish plan
///
/// 1. Resolve the commit author and scope it to `repo`
/// 2. Create the head branch from HEAD
/// 3. Stage everything and commit
/// 4. Push the branch with `credential`
/// 5. Open the pull request
pub async fn execute_publish(
    plan: &PublishPlan,
    event: &TriggerEvent,
    actor: Option<&str>,
    repo: &mut dyn Repository,
    platform: &dyn PlatformService,
    credential: &HttpCredential,
    progress: &dyn ProgressCallback,
) -> Result<PullRequest> {
    let author = resolve_author(event, actor)?;
    info!("Committing as {} <{}>", author.name, author.email);
    repo.set_identity(&author);

    progress.on_phase(Phase::Committing).await;
    repo.create_branch(&plan.branch)?;
    repo.stage_all()?;
    repo.commit(&plan.commit_message)?;

    progress.on_phase(Phase::Pushing).await;
    progress.on_push(&plan.branch, PushStatus::Started).await;
    if let Err(e) = repo.push_branch(&plan.remote, &plan.branch, credential) {
        progress
            .on_push(&plan.branch, PushStatus::Failed(e.to_string()))
            .await;
        return Err(e);
    }
    progress.on_push(&plan.branch, PushStatus::Success).await;

    progress.on_phase(Phase::CreatingPr).await;
    progress
        .on_message(&format!(
            "Creating a request to pull {} into {}",
            plan.branch, plan.base
        ))
        .await;

    let pr = match platform.create_pr(&plan.request).await {
        Ok(pr) => pr,
        Err(e) => {
            progress.on_error(&e).await;
            return Err(e);
        }
    };
    info!("Created pull request #{}", pr.number);
    progress.on_pr_created(&pr).await;

    Ok(pr)
}

/// Report what would be done in a dry run
pub async fn report_dry_run(plan: &PublishPlan, progress: &dyn ProgressCallback) {
    progress
        .on_message("Dry run - no changes will be made")
        .await;
    progress
        .on_message(&format!("Would commit: {}", plan.commit_message))
        .await;
    progress
        .on_message(&format!("Would push: {} to {}", plan.branch, plan.remote))
        .await;
    progress
        .on_message(&format!(
            "Would create PR: {} → {} ({})",
            plan.request.head, plan.request.base, plan.request.title
        ))
        .await;
}

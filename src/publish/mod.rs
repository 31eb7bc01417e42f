//! Two-phase publish engine
//!
//! 1. Planning - evaluate the skip conditions and decide what to publish
//! 2. Execution - commit, push and open the pull request

mod execute;
mod plan;
mod progress;

pub use execute::{execute_publish, report_dry_run};
pub use plan::{Decision, PublishPlan, SkipReason, plan_run};
pub use progress::{NoopProgress, Phase, ProgressCallback, PushStatus};

use crate::auth::HttpCredential;
use crate::config::Config;
use crate::error::Result;
use crate::event::TriggerEvent;
use crate::platform::PlatformService;
use crate::repo::Repository;
use crate::types::PullRequest;

/// Terminal state of a run
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// A skip condition held; nothing was changed
    Skipped(SkipReason),
    /// Every check passed but `--dry-run` was set
    DryRun(PublishPlan),
    /// The pull request was opened
    Created(PullRequest),
}

/// Run the whole pipeline once
pub async fn run(
    config: &Config,
    event: &TriggerEvent,
    repo: &mut dyn Repository,
    platform: &dyn PlatformService,
    credential: &HttpCredential,
    progress: &dyn ProgressCallback,
) -> Result<RunOutcome> {
    progress.on_phase(Phase::Checking).await;

    let plan = match plan_run(config, event, repo)? {
        Decision::Skip(reason) => {
            progress.on_skip(&reason).await;
            return Ok(RunOutcome::Skipped(reason));
        }
        Decision::Publish(plan) => plan,
    };

    progress
        .on_message("Repository has modified or untracked files")
        .await;

    if config.dry_run {
        report_dry_run(&plan, progress).await;
        return Ok(RunOutcome::DryRun(plan));
    }

    let pr = execute_publish(
        &plan,
        event,
        config.actor.as_deref(),
        repo,
        platform,
        credential,
        progress,
    )
    .await?;

    progress.on_phase(Phase::Complete).await;
    Ok(RunOutcome::Created(pr))
}

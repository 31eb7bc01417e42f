//! Run command - the whole pipeline for one CI event

use crate::cli::progress::CliProgress;
use crate::cli::style::Stylize;
use anstream::println;
use create_pull_request::auth::{AccessToken, HttpCredential};
use create_pull_request::config::Config;
use create_pull_request::error::Result;
use create_pull_request::event::TriggerEvent;
use create_pull_request::platform::create_platform_service;
use create_pull_request::publish::{RunOutcome, run};
use create_pull_request::repo::GitRepository;
use tracing::debug;

/// Run the pipeline with configuration from flags and environment
pub async fn run_create(config: &Config) -> Result<()> {
    let event = TriggerEvent::load(&config.event_name, &config.event_path)?;
    if config.debug_event {
        event.log_debug()?;
    }

    let platform_config = config.platform_config()?;
    let token = AccessToken::new(config.token.clone());
    let platform = create_platform_service(&platform_config, &token)?;
    let credential = HttpCredential::from_token(&token);

    let mut repo = GitRepository::new(&config.path);
    debug!("Using working copy {}", repo.workdir().display());

    let progress = CliProgress;
    let outcome = run(
        config,
        &event,
        &mut repo,
        platform.as_ref(),
        &credential,
        &progress,
    )
    .await?;

    match outcome {
        RunOutcome::Skipped(reason) => debug!("Run skipped: {reason}"),
        RunOutcome::DryRun(plan) => {
            println!();
            println!(
                "{} {}",
                "Dry run complete - nothing was changed for".warn().for_stdout(),
                plan.branch.accent()
            );
        }
        RunOutcome::Created(pr) => {
            println!();
            println!(
                "Created pull request {} in {}/{}",
                format!("#{}", pr.number).accent(),
                platform_config.owner,
                platform_config.repo
            );
        }
    }

    Ok(())
}

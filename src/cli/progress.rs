//! CLI progress callback with styled output

use crate::cli::style::{Stylize, arrow, check, cross, link, skip};
use anstream::{eprintln, println};
use async_trait::async_trait;
use create_pull_request::error::Error;
use create_pull_request::publish::{Phase, ProgressCallback, PushStatus, SkipReason};
use create_pull_request::types::{BranchName, PullRequest};

/// CLI progress callback that prints to stdout with styled output
pub struct CliProgress;

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        match phase {
            Phase::Checking => println!("{}...", phase.to_string().emphasis()),
            Phase::Complete => println!("{} {}", check(), phase.to_string().success()),
            _ => println!("{} {}...", arrow(), phase.to_string().emphasis()),
        }
    }

    async fn on_skip(&self, reason: &SkipReason) {
        println!("{} {}. Skipping.", skip(), reason.to_string().muted());
    }

    async fn on_push(&self, branch: &BranchName, status: PushStatus) {
        match &status {
            PushStatus::Started => {
                println!("  Pushing {}...", branch.accent());
            }
            PushStatus::Success => {
                println!("  {} Pushed {}", check(), branch.emphasis());
            }
            PushStatus::Failed(_) => {
                eprintln!(
                    "  {} Failed to push {}: {}",
                    cross(),
                    branch.accent().for_stderr(),
                    status.to_string().error()
                );
            }
        }
    }

    async fn on_pr_created(&self, pr: &PullRequest) {
        let pr_num = format!("#{}", pr.number);
        println!(
            "  {} Created pull request {} ({} → {})",
            check(),
            pr_num.accent(),
            pr.head_ref.emphasis(),
            pr.base_ref.emphasis()
        );
        if !pr.html_url.is_empty() {
            println!("    {}", link(&pr.html_url));
        }
    }

    async fn on_error(&self, err: &Error) {
        eprintln!("{}: {}", "error".error(), err);
    }

    async fn on_message(&self, message: &str) {
        println!("  {}", message.muted());
    }
}

//! Hosting API services
//!
//! Pull request creation sits behind [`PlatformService`] so the pipeline
//! can be exercised without a network.

mod detection;
mod factory;
mod github;

pub use detection::parse_repository;
pub use factory::create_platform_service;
pub use github::GitHubService;

use crate::error::Result;
use crate::types::{PlatformConfig, PullRequest, PullRequestRequest};
use async_trait::async_trait;

/// Platform service trait for pull request operations
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// Open a new pull request
    async fn create_pr(&self, request: &PullRequestRequest) -> Result<PullRequest>;

    /// Get the platform configuration
    fn config(&self) -> &PlatformConfig;
}

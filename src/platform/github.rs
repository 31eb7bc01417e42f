//! GitHub platform service implementation

use crate::auth::AccessToken;
use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{PlatformConfig, PullRequest, PullRequestRequest};
use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::debug;

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    config: PlatformConfig,
}

impl GitHubService {
    /// Create a new GitHub service against `config.api_url`
    pub fn new(token: &AccessToken, config: PlatformConfig) -> Result<Self> {
        let client = Octocrab::builder()
            .personal_token(token.expose().to_string())
            .base_uri(config.api_url.as_str())
            .map_err(|e| Error::GitHubApi(e.to_string()))?
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl PlatformService for GitHubService {
    async fn create_pr(&self, request: &PullRequestRequest) -> Result<PullRequest> {
        debug!(
            "Creating pull request {} -> {} in {}/{}",
            request.head, request.base, self.config.owner, self.config.repo
        );

        let pr = self
            .client
            .pulls(&self.config.owner, &self.config.repo)
            .create(&request.title, &request.head, &request.base)
            .body(&request.body)
            .send()
            .await?;

        Ok(PullRequest {
            number: pr.number,
            html_url: pr
                .html_url
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            base_ref: pr.base.ref_field.clone(),
            head_ref: pr.head.ref_field.clone(),
            title: pr.title.as_deref().unwrap_or_default().to_string(),
        })
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}

//! Platform service factory

use crate::auth::AccessToken;
use crate::error::Result;
use crate::platform::{GitHubService, PlatformService};
use crate::types::PlatformConfig;

/// Create the hosting service for `config`
pub fn create_platform_service(
    config: &PlatformConfig,
    token: &AccessToken,
) -> Result<Box<dyn PlatformService>> {
    Ok(Box::new(GitHubService::new(token, config.clone())?))
}

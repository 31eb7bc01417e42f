//! Repository coordinates from CI configuration

use crate::error::{Error, Result};
use crate::types::PlatformConfig;
use regex::Regex;
use std::sync::LazyLock;

static REPO_SLUG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+)$").expect("hardcoded regex is valid")
});

/// Parse an `owner/repo` slug and the REST API base URL
pub fn parse_repository(slug: &str, api_url: &str) -> Result<PlatformConfig> {
    let captures = REPO_SLUG
        .captures(slug.trim())
        .ok_or_else(|| Error::Config(format!("invalid repository `{slug}`, expected owner/repo")))?;

    let url = url::Url::parse(api_url)
        .map_err(|e| Error::Config(format!("invalid API URL `{api_url}`: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::Config(format!(
            "invalid API URL `{api_url}`: unsupported scheme"
        )));
    }

    Ok(PlatformConfig {
        owner: captures[1].to_string(),
        repo: captures[2].to_string(),
        api_url: api_url.trim_end_matches('/').to_string(),
    })
}

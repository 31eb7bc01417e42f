//! Run configuration
//!
//! Every option is a long flag that falls back to the environment variable
//! the CI platform sets, so a workflow step normally passes no arguments.

use crate::branch::SuffixMode;
use crate::error::{Error, Result};
use crate::platform::parse_repository;
use crate::types::PlatformConfig;
use clap::Parser;
use clap::builder::FalseyValueParser;
use std::path::PathBuf;

/// Namespace prefix of branch refs
pub const BRANCH_REF_PREFIX: &str = "refs/heads/";

/// Default prefix for generated branches
pub const DEFAULT_BRANCH_PREFIX: &str = "create-pull-request/patch";

/// Default commit message
pub const DEFAULT_COMMIT_MESSAGE: &str = "Auto-committed changes by create-pull-request action";

/// Default pull request title
pub const DEFAULT_TITLE: &str = "Auto-generated by create-pull-request action";

/// Default pull request body
pub const DEFAULT_BODY: &str = "Auto-generated pull request by \
     [create-pull-request](https://github.com/peter-evans/create-pull-request) GitHub Action";

/// Default GitHub REST API endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Configuration for a single run
#[derive(Clone, Parser)]
#[command(name = "create-pull-request")]
#[command(about = "Create a pull request from working-tree changes in a CI run")]
#[command(version)]
pub struct Config {
    /// Name of the triggering event (e.g. `push`)
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    pub event_name: String,

    /// Path to the JSON event payload
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: PathBuf,

    /// Token used for pushing and for the GitHub API
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Repository slug, `owner/repo`
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: String,

    /// Ref that triggered the run (e.g. `refs/heads/main`)
    #[arg(long = "ref", env = "GITHUB_REF")]
    pub git_ref: String,

    /// Acting user, used as commit author for non-push events
    #[arg(long, env = "GITHUB_ACTOR")]
    pub actor: Option<String>,

    /// GitHub REST API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Prefix of the generated branch name
    #[arg(long, env = "PULL_REQUEST_BRANCH", default_value = DEFAULT_BRANCH_PREFIX)]
    pub branch: String,

    /// How the generated branch name is made unique
    #[arg(long, env = "BRANCH_SUFFIX", value_enum, default_value_t = SuffixMode::ShortCommitHash)]
    pub branch_suffix: SuffixMode,

    /// Commit message for the changes
    #[arg(long, env = "COMMIT_MESSAGE", default_value = DEFAULT_COMMIT_MESSAGE)]
    pub commit_message: String,

    /// Pull request title
    #[arg(long, env = "PULL_REQUEST_TITLE", default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Pull request body
    #[arg(long, env = "PULL_REQUEST_BODY", default_value = DEFAULT_BODY)]
    pub body: String,

    /// Log the event name and payload
    #[arg(long, env = "DEBUG_EVENT", value_parser = FalseyValueParser::new())]
    pub debug_event: bool,

    /// Bypass the event filter
    #[arg(long, env = "SKIP_IGNORE", value_parser = FalseyValueParser::new())]
    pub skip_ignore: bool,

    /// Dry run - show what would be done without making changes
    #[arg(long, env = "DRY_RUN", value_parser = FalseyValueParser::new())]
    pub dry_run: bool,

    /// Git remote to push to
    #[arg(long, default_value = "origin")]
    pub remote: String,

    /// Path to the git working copy (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,
}

impl Config {
    /// Branch the pull request targets, taken from the triggering ref
    pub fn base_branch(&self) -> Result<String> {
        self.git_ref
            .strip_prefix(BRANCH_REF_PREFIX)
            .filter(|name| !name.is_empty())
            .map(ToString::to_string)
            .ok_or_else(|| {
                Error::Config(format!(
                    "GITHUB_REF `{}` is not a branch ref",
                    self.git_ref
                ))
            })
    }

    /// Hosting coordinates derived from the repository slug and API URL
    pub fn platform_config(&self) -> Result<PlatformConfig> {
        parse_repository(&self.repository, &self.api_url)
    }
}

//! Error types for create-pull-request

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a run
///
/// There is no local recovery: every variant propagates to the binary,
/// which reports it and exits non-zero.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration value
    #[error("configuration error: {0}")]
    Config(String),

    /// Required configuration value is absent
    #[error("missing required configuration: {0}")]
    MissingConfig(&'static str),

    /// Event payload file could not be read
    #[error("failed to read event payload {}: {source}", path.display())]
    EventRead {
        /// Path of the payload file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Event payload is not valid JSON
    #[error("failed to parse event payload: {0}")]
    EventParse(#[from] serde_json::Error),

    /// Event payload lacks an expected field or has the wrong type
    #[error("malformed event payload: field `{field}` {reason}")]
    MalformedEvent {
        /// Dotted path of the offending field
        field: String,
        /// What was wrong with it
        reason: String,
    },

    /// A git command exited unsuccessfully
    #[error("git {command} failed: {message}")]
    Git {
        /// Subcommand that failed (e.g. `push`)
        command: String,
        /// Captured stderr (or stdout when stderr is empty)
        message: String,
    },

    /// I/O error, typically while spawning git
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// GitHub API error
    #[error("GitHub API error: {0}")]
    GitHubApi(String),
}

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        match err {
            octocrab::Error::GitHub { source, .. } => Self::GitHubApi(source.message.clone()),
            other => Self::GitHubApi(other.to_string()),
        }
    }
}

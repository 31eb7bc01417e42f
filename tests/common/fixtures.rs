//! Test data factories for create-pull-request types
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use create_pull_request::branch::SuffixMode;
use create_pull_request::config::{
    Config, DEFAULT_API_URL, DEFAULT_BODY, DEFAULT_BRANCH_PREFIX, DEFAULT_COMMIT_MESSAGE,
    DEFAULT_TITLE,
};
use create_pull_request::event::TriggerEvent;
use create_pull_request::types::PlatformConfig;
use serde_json::json;
use std::path::PathBuf;

/// Config with every default, targeting `git_ref`
pub fn make_config(git_ref: &str) -> Config {
    Config {
        event_name: "push".to_string(),
        event_path: PathBuf::from("event.json"),
        token: "test-token".to_string(),
        repository: "testowner/testrepo".to_string(),
        git_ref: git_ref.to_string(),
        actor: Some("octocat".to_string()),
        api_url: DEFAULT_API_URL.to_string(),
        branch: DEFAULT_BRANCH_PREFIX.to_string(),
        branch_suffix: SuffixMode::ShortCommitHash,
        commit_message: DEFAULT_COMMIT_MESSAGE.to_string(),
        title: DEFAULT_TITLE.to_string(),
        body: DEFAULT_BODY.to_string(),
        debug_event: false,
        skip_ignore: false,
        dry_run: false,
        remote: "origin".to_string(),
        path: PathBuf::from("."),
    }
}

/// Push event payload
pub fn push_payload(git_ref: &str, deleted: bool) -> serde_json::Value {
    json!({
        "ref": git_ref,
        "deleted": deleted,
        "created": false,
        "forced": false,
        "head_commit": {
            "id": "abc1234def5678",
            "message": "Update generated files",
            "author": {
                "name": "Push Author",
                "email": "push.author@example.com",
                "username": "pushauthor"
            }
        }
    })
}

/// Push event to `git_ref`
pub fn push_event(git_ref: &str, deleted: bool) -> TriggerEvent {
    TriggerEvent::new("push", push_payload(git_ref, deleted))
}

/// Manually dispatched workflow event
pub fn dispatch_event() -> TriggerEvent {
    TriggerEvent::new("workflow_dispatch", json!({"inputs": {}, "ref": "refs/heads/main"}))
}

/// GitHub platform config for the test repository
pub fn github_config() -> PlatformConfig {
    PlatformConfig {
        owner: "testowner".to_string(),
        repo: "testrepo".to_string(),
        api_url: DEFAULT_API_URL.to_string(),
    }
}


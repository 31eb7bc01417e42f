//! Progress callback that records what it was told

#![allow(dead_code)]

use async_trait::async_trait;
use create_pull_request::error::Error;
use create_pull_request::publish::{Phase, ProgressCallback, PushStatus, SkipReason};
use create_pull_request::types::{BranchName, PullRequest};
use std::sync::Mutex;

/// Records phases, skips, push statuses and messages
#[derive(Default)]
pub struct RecordingProgress {
    pub phases: Mutex<Vec<Phase>>,
    pub skips: Mutex<Vec<SkipReason>>,
    pub pushes: Mutex<Vec<PushStatus>>,
    pub errors: Mutex<Vec<String>>,
    pub messages: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub fn phases(&self) -> Vec<Phase> {
        self.phases.lock().unwrap().clone()
    }

    pub fn skips(&self) -> Vec<SkipReason> {
        self.skips.lock().unwrap().clone()
    }

    pub fn pushes(&self) -> Vec<PushStatus> {
        self.pushes.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_phase(&self, phase: Phase) {
        self.phases.lock().unwrap().push(phase);
    }

    async fn on_skip(&self, reason: &SkipReason) {
        self.skips.lock().unwrap().push(reason.clone());
    }

    async fn on_push(&self, _branch: &BranchName, status: PushStatus) {
        self.pushes.lock().unwrap().push(status);
    }

    async fn on_pr_created(&self, _pr: &PullRequest) {}

    async fn on_error(&self, error: &Error) {
        self.errors.lock().unwrap().push(error.to_string());
    }

    async fn on_message(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

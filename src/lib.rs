//! create-pull-request - open a pull request from CI working-tree changes
//!
//! Runs once per CI trigger event. The pipeline filters the event, derives
//! an idempotent branch name, checks that the branch has not already been
//! pushed, checks for working-tree changes, then commits, pushes and opens
//! a pull request.

pub mod auth;
pub mod branch;
pub mod config;
pub mod error;
pub mod event;
pub mod platform;
pub mod publish;
pub mod repo;
pub mod types;

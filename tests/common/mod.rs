//! Shared test utilities

pub mod fixtures;
pub mod mock_platform;
pub mod mock_repo;
pub mod recording_progress;

//! Trigger event loading and inspection
//!
//! The CI platform describes what caused the run with an event name and a
//! JSON payload on disk. Fields are read through [`TriggerEvent::field`],
//! which reports a missing or mistyped field as
//! [`Error::MalformedEvent`](crate::error::Error::MalformedEvent) instead of
//! guessing a value.

mod author;
mod filter;

pub use author::resolve_author;
pub use filter::{IgnoreReason, ignore_reason, should_ignore};

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::path::Path;
use tracing::info;

/// Kind of trigger event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventName {
    /// A push to a ref
    Push,
    /// Any other event (`workflow_dispatch`, `schedule`, ...)
    Other(String),
}

impl EventName {
    /// Classify a raw event name
    pub fn parse(name: &str) -> Self {
        if name == "push" {
            Self::Push
        } else {
            Self::Other(name.to_string())
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push => f.write_str("push"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

/// The event that triggered this run
#[derive(Debug, Clone)]
pub struct TriggerEvent {
    /// Event kind
    pub name: EventName,
    /// Raw JSON payload
    pub payload: Value,
}

impl TriggerEvent {
    /// Build an event from an already parsed payload
    pub fn new(name: &str, payload: Value) -> Self {
        Self {
            name: EventName::parse(name),
            payload,
        }
    }

    /// Read and parse the payload file at `path`
    pub fn load(name: &str, path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::EventRead {
            path: path.to_path_buf(),
            source,
        })?;
        let payload = serde_json::from_str(&contents)?;
        Ok(Self::new(name, payload))
    }

    /// Whether this is a push event
    pub fn is_push(&self) -> bool {
        self.name == EventName::Push
    }

    /// Log the event name and the payload with sorted keys
    pub fn log_debug(&self) -> Result<()> {
        // serde_json's default map is ordered, so keys come out sorted
        let pretty = serde_json::to_string_pretty(&self.payload)?;
        info!("Event: {}", self.name);
        info!("Payload:\n{pretty}");
        Ok(())
    }

    /// Read a nested payload field, e.g. `&["head_commit", "author", "email"]`
    pub fn field<T: DeserializeOwned>(&self, path: &[&str]) -> Result<T> {
        let dotted = path.join(".");
        let mut value = &self.payload;

        for key in path {
            value = value.get(key).ok_or_else(|| Error::MalformedEvent {
                field: dotted.clone(),
                reason: "is missing".to_string(),
            })?;
        }

        T::deserialize(value).map_err(|e| Error::MalformedEvent {
            field: dotted,
            reason: format!("has an unexpected type: {e}"),
        })
    }
}

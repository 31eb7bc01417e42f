//! CLI command
//!
//! Command implementation for the `create-pull-request` binary.

mod progress;
mod run;
mod style;

pub use run::run_create;

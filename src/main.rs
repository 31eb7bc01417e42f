//! create-pull-request - open a pull request from CI working-tree changes
//!
//! CLI binary, normally invoked as a workflow step with configuration from
//! the environment.

use anyhow::Result;
use clap::Parser;
use create_pull_request::config::Config;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "create_pull_request=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    cli::run_create(&config).await?;

    Ok(())
}

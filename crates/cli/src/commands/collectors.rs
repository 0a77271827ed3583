//! Collector list command.

use anyhow::{Context, Result};
use collector_config::Config;
use tracing::info;

use crate::commands::build_client;
use crate::formatters::{OutputFormat, format_collectors};

/// List collectors registered with the server.
pub async fn list(config: Config, format: OutputFormat) -> Result<()> {
    info!("Listing collectors");

    let client = build_client(&config)?;
    let collectors = client
        .list_collectors()
        .await
        .context("Could not retrieve collectors")?;

    println!("{}", format_collectors(&collectors, format)?);
    Ok(())
}

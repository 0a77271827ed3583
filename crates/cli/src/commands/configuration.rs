//! Configuration show command.

use anyhow::{Context, Result};
use collector_config::Config;
use tracing::info;

use crate::commands::build_client;
use crate::formatters::{OutputFormat, format_configuration};

/// Show the full configuration of one collector.
pub async fn show(config: Config, collector_id: &str, format: OutputFormat) -> Result<()> {
    info!(collector_id, "Fetching collector configuration");

    let client = build_client(&config)?;
    let configuration = client
        .configuration(collector_id)
        .await
        .context("Could not retrieve configuration")?;

    println!("{}", format_configuration(&configuration, format)?);
    Ok(())
}

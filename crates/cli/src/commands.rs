//! Command implementations and shared command helpers.

mod collectors;
mod configuration;
mod inputs;
mod outputs;
mod snippets;

use std::collections::BTreeMap;
use std::io::{BufRead, Write};

use anyhow::{Context, Result, anyhow};
use collector_client::{CollectorClient, ConfigurationStore};
use collector_config::Config;

use crate::args::Commands;
use crate::formatters::OutputFormat;

/// Dispatch a parsed command.
pub async fn run(config: Config, command: Commands, output: &str) -> Result<()> {
    let format = OutputFormat::parse(output)?;

    match command {
        Commands::Collectors => collectors::list(config, format).await,
        Commands::Configuration { collector_id } => {
            configuration::show(config, &collector_id, format).await
        }
        Commands::Inputs { command } => inputs::run(config, command, format).await,
        Commands::Outputs { command } => outputs::run(config, command, format).await,
        Commands::Snippets { command } => snippets::run(config, command, format).await,
    }
}

/// Build an API client from the loaded configuration.
pub(crate) fn build_client(config: &Config) -> Result<CollectorClient> {
    CollectorClient::builder()
        .from_config(config)
        .build()
        .context("Could not build API client")
}

/// Build a reload-after-write store scoped to one collector.
pub(crate) fn build_store(config: &Config, collector_id: &str) -> Result<ConfigurationStore> {
    Ok(ConfigurationStore::new(build_client(config)?, collector_id))
}

/// Parse repeated `KEY=VALUE` flags into a property mapping.
pub(crate) fn parse_properties(pairs: &[String]) -> Result<BTreeMap<String, String>> {
    pairs
        .iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(key, value)| (key.trim().to_string(), value.to_string()))
                .ok_or_else(|| anyhow!("invalid property \"{pair}\", expected KEY=VALUE"))
        })
        .collect()
}

/// Message label for an entity, preferring its name when known.
pub(crate) fn entity_label<'a>(name: Option<&'a str>, id: &'a str) -> &'a str {
    name.unwrap_or(id)
}

/// Resolve a content argument, reading stdin when it is `-`.
pub(crate) fn read_content(value: &str) -> Result<String> {
    if value != "-" {
        return Ok(value.to_string());
    }
    let mut content = String::new();
    std::io::Read::read_to_string(&mut std::io::stdin(), &mut content)
        .context("Could not read snippet content from stdin")?;
    Ok(content)
}

/// Ask the user to confirm a destructive action on stdin.
pub(crate) fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt}");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

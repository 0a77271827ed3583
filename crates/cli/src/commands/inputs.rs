//! Input management commands.
//!
//! Responsibilities:
//! - Create, update, and delete inputs on a collector, validating names
//!   locally before any save request is issued.
//! - Reconfirm deletes interactively unless `--yes` is given.
//!
//! Invariants:
//! - A validation failure blocks the save with no network call.
//! - Every successful mutation prints the freshly reloaded input table.

use anyhow::{Context, Result, anyhow};
use collector_client::{Input, validate_input};
use collector_config::Config;
use tracing::info;

use crate::args::InputCommands;
use crate::commands::{build_client, build_store, confirm, entity_label, parse_properties};
use crate::formatters::{OutputFormat, format_inputs};

/// Dispatch an inputs subcommand.
pub async fn run(config: Config, command: InputCommands, format: OutputFormat) -> Result<()> {
    match command {
        InputCommands::List { collector_id } => list(config, &collector_id, format).await,
        InputCommands::Create {
            collector_id,
            name,
            forward_to,
            input_type,
            properties,
        } => {
            let input = Input {
                name,
                forward_to,
                input_type,
                properties: parse_properties(&properties)?,
                ..Input::default()
            };
            save(config, &collector_id, input, format).await
        }
        InputCommands::Update {
            collector_id,
            input_id,
            name,
            forward_to,
            properties,
        } => update(config, &collector_id, &input_id, name, forward_to, properties, format).await,
        InputCommands::Delete {
            collector_id,
            input_id,
            yes,
        } => delete(config, &collector_id, &input_id, yes, format).await,
    }
}

async fn list(config: Config, collector_id: &str, format: OutputFormat) -> Result<()> {
    let client = build_client(&config)?;
    let inputs = client
        .list_inputs(collector_id)
        .await
        .context("Could not retrieve inputs")?;

    println!("{}", format_inputs(&inputs, format)?);
    Ok(())
}

async fn save(
    config: Config,
    collector_id: &str,
    input: Input,
    format: OutputFormat,
) -> Result<()> {
    let mut store = build_store(&config, collector_id)?;
    let current = store
        .refresh()
        .await
        .context("Could not retrieve configuration")?;

    validate_input(current, &input)
        .with_context(|| format!("Could not save input \"{}\"", input.name))?;

    let action = if input.id.is_empty() { "created" } else { "updated" };
    store
        .save_input(&input)
        .await
        .with_context(|| format!("Could not save input \"{}\"", input.name))?;

    info!(collector_id, name = %input.name, action, "input saved");
    println!("Input \"{}\" successfully {action}", input.name);

    if let Some(current) = store.current() {
        println!("{}", format_inputs(&current.inputs, format)?);
    }
    Ok(())
}

async fn update(
    config: Config,
    collector_id: &str,
    input_id: &str,
    name: Option<String>,
    forward_to: Option<String>,
    properties: Vec<String>,
    format: OutputFormat,
) -> Result<()> {
    let mut store = build_store(&config, collector_id)?;
    let current = store
        .refresh()
        .await
        .context("Could not retrieve configuration")?;

    let existing = current
        .inputs
        .iter()
        .find(|i| i.id == input_id)
        .ok_or_else(|| {
            anyhow!("No input with id \"{input_id}\" on collector \"{collector_id}\"")
        })?;

    let mut input = existing.clone();
    if let Some(name) = name {
        input.name = name;
    }
    if let Some(forward_to) = forward_to {
        input.forward_to = forward_to;
    }
    if !properties.is_empty() {
        input.properties = parse_properties(&properties)?;
    }

    validate_input(current, &input)
        .with_context(|| format!("Could not save input \"{}\"", input.name))?;

    store
        .save_input(&input)
        .await
        .with_context(|| format!("Could not save input \"{}\"", input.name))?;

    info!(collector_id, name = %input.name, "input updated");
    println!("Input \"{}\" successfully updated", input.name);

    if let Some(current) = store.current() {
        println!("{}", format_inputs(&current.inputs, format)?);
    }
    Ok(())
}

async fn delete(
    config: Config,
    collector_id: &str,
    input_id: &str,
    yes: bool,
    format: OutputFormat,
) -> Result<()> {
    let mut store = build_store(&config, collector_id)?;
    let current = store
        .refresh()
        .await
        .context("Could not retrieve configuration")?;
    let name = current
        .inputs
        .iter()
        .find(|i| i.id == input_id)
        .map(|i| i.name.clone());

    if !yes {
        let prompt = match &name {
            Some(name) => format!("Delete input \"{name}\" ({input_id})? [y/N] "),
            None => format!("Delete input {input_id}? [y/N] "),
        };
        if !confirm(&prompt)? {
            println!("Aborted.");
            return Ok(());
        }
    }

    let label = entity_label(name.as_deref(), input_id).to_string();
    store
        .delete_input(input_id)
        .await
        .with_context(|| format!("Could not delete input \"{label}\""))?;

    info!(collector_id, input_id, "input deleted");
    println!("Input \"{label}\" successfully deleted");

    if let Some(current) = store.current() {
        println!("{}", format_inputs(&current.inputs, format)?);
    }
    Ok(())
}

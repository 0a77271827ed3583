//! Output management commands.

use anyhow::{Context, Result, anyhow};
use collector_client::{Output, validate_output};
use collector_config::Config;
use tracing::info;

use crate::args::OutputCommands;
use crate::commands::{build_client, build_store, confirm, entity_label, parse_properties};
use crate::formatters::{OutputFormat, format_outputs};

/// Dispatch an outputs subcommand.
pub async fn run(config: Config, command: OutputCommands, format: OutputFormat) -> Result<()> {
    match command {
        OutputCommands::List { collector_id } => list(config, &collector_id, format).await,
        OutputCommands::Create {
            collector_id,
            name,
            output_type,
            properties,
        } => {
            let output = Output {
                name,
                output_type,
                properties: parse_properties(&properties)?,
                ..Output::default()
            };
            save(config, &collector_id, output, format).await
        }
        OutputCommands::Update {
            collector_id,
            output_id,
            name,
            properties,
        } => update(config, &collector_id, &output_id, name, properties, format).await,
        OutputCommands::Delete {
            collector_id,
            output_id,
            yes,
        } => delete(config, &collector_id, &output_id, yes, format).await,
    }
}

async fn list(config: Config, collector_id: &str, format: OutputFormat) -> Result<()> {
    let client = build_client(&config)?;
    let outputs = client
        .list_outputs(collector_id)
        .await
        .context("Could not retrieve outputs")?;

    println!("{}", format_outputs(&outputs, format)?);
    Ok(())
}

async fn save(
    config: Config,
    collector_id: &str,
    output: Output,
    format: OutputFormat,
) -> Result<()> {
    let mut store = build_store(&config, collector_id)?;
    let current = store
        .refresh()
        .await
        .context("Could not retrieve configuration")?;

    validate_output(current, &output)
        .with_context(|| format!("Could not save output \"{}\"", output.name))?;

    let action = if output.id.is_empty() { "created" } else { "updated" };
    store
        .save_output(&output)
        .await
        .with_context(|| format!("Could not save output \"{}\"", output.name))?;

    info!(collector_id, name = %output.name, action, "output saved");
    println!("Output \"{}\" successfully {action}", output.name);

    if let Some(current) = store.current() {
        println!("{}", format_outputs(&current.outputs, format)?);
    }
    Ok(())
}

async fn update(
    config: Config,
    collector_id: &str,
    output_id: &str,
    name: Option<String>,
    properties: Vec<String>,
    format: OutputFormat,
) -> Result<()> {
    let mut store = build_store(&config, collector_id)?;
    let current = store
        .refresh()
        .await
        .context("Could not retrieve configuration")?;

    let existing = current
        .outputs
        .iter()
        .find(|o| o.id == output_id)
        .ok_or_else(|| {
            anyhow!("No output with id \"{output_id}\" on collector \"{collector_id}\"")
        })?;

    let mut output = existing.clone();
    if let Some(name) = name {
        output.name = name;
    }
    if !properties.is_empty() {
        output.properties = parse_properties(&properties)?;
    }

    validate_output(current, &output)
        .with_context(|| format!("Could not save output \"{}\"", output.name))?;

    store
        .save_output(&output)
        .await
        .with_context(|| format!("Could not save output \"{}\"", output.name))?;

    info!(collector_id, name = %output.name, "output updated");
    println!("Output \"{}\" successfully updated", output.name);

    if let Some(current) = store.current() {
        println!("{}", format_outputs(&current.outputs, format)?);
    }
    Ok(())
}

async fn delete(
    config: Config,
    collector_id: &str,
    output_id: &str,
    yes: bool,
    format: OutputFormat,
) -> Result<()> {
    let mut store = build_store(&config, collector_id)?;
    let current = store
        .refresh()
        .await
        .context("Could not retrieve configuration")?;
    let name = current
        .outputs
        .iter()
        .find(|o| o.id == output_id)
        .map(|o| o.name.clone());

    if !yes {
        let prompt = match &name {
            Some(name) => format!("Delete output \"{name}\" ({output_id})? [y/N] "),
            None => format!("Delete output {output_id}? [y/N] "),
        };
        if !confirm(&prompt)? {
            println!("Aborted.");
            return Ok(());
        }
    }

    let label = entity_label(name.as_deref(), output_id).to_string();
    store
        .delete_output(output_id)
        .await
        .with_context(|| format!("Could not delete output \"{label}\""))?;

    info!(collector_id, output_id, "output deleted");
    println!("Output \"{label}\" successfully deleted");

    if let Some(current) = store.current() {
        println!("{}", format_outputs(&current.outputs, format)?);
    }
    Ok(())
}

//! Snippet management commands.

use anyhow::{Context, Result, anyhow};
use collector_client::{Snippet, validate_snippet};
use collector_config::Config;
use tracing::info;

use crate::args::SnippetCommands;
use crate::commands::{build_client, build_store, confirm, entity_label, read_content};
use crate::formatters::{OutputFormat, format_snippets};

/// Dispatch a snippets subcommand.
pub async fn run(config: Config, command: SnippetCommands, format: OutputFormat) -> Result<()> {
    match command {
        SnippetCommands::List { collector_id } => list(config, &collector_id, format).await,
        SnippetCommands::Create {
            collector_id,
            name,
            snippet_type,
            content,
        } => {
            let snippet = Snippet {
                name,
                snippet_type,
                snippet: read_content(&content)?,
                ..Snippet::default()
            };
            save(config, &collector_id, snippet, format).await
        }
        SnippetCommands::Update {
            collector_id,
            snippet_id,
            name,
            content,
        } => update(config, &collector_id, &snippet_id, name, content, format).await,
        SnippetCommands::Delete {
            collector_id,
            snippet_id,
            yes,
        } => delete(config, &collector_id, &snippet_id, yes, format).await,
    }
}

async fn list(config: Config, collector_id: &str, format: OutputFormat) -> Result<()> {
    let client = build_client(&config)?;
    let snippets = client
        .list_snippets(collector_id)
        .await
        .context("Could not retrieve snippets")?;

    println!("{}", format_snippets(&snippets, format)?);
    Ok(())
}

async fn save(
    config: Config,
    collector_id: &str,
    snippet: Snippet,
    format: OutputFormat,
) -> Result<()> {
    let mut store = build_store(&config, collector_id)?;
    let current = store
        .refresh()
        .await
        .context("Could not retrieve configuration")?;

    validate_snippet(current, &snippet)
        .with_context(|| format!("Could not save snippet \"{}\"", snippet.name))?;

    let action = if snippet.id.is_empty() { "created" } else { "updated" };
    store
        .save_snippet(&snippet)
        .await
        .with_context(|| format!("Could not save snippet \"{}\"", snippet.name))?;

    info!(collector_id, name = %snippet.name, action, "snippet saved");
    println!("Snippet \"{}\" successfully {action}", snippet.name);

    if let Some(current) = store.current() {
        println!("{}", format_snippets(&current.snippets, format)?);
    }
    Ok(())
}

async fn update(
    config: Config,
    collector_id: &str,
    snippet_id: &str,
    name: Option<String>,
    content: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let mut store = build_store(&config, collector_id)?;
    let current = store
        .refresh()
        .await
        .context("Could not retrieve configuration")?;

    let existing = current
        .snippets
        .iter()
        .find(|s| s.id == snippet_id)
        .ok_or_else(|| {
            anyhow!("No snippet with id \"{snippet_id}\" on collector \"{collector_id}\"")
        })?;

    let mut snippet = existing.clone();
    if let Some(name) = name {
        snippet.name = name;
    }
    if let Some(content) = content {
        snippet.snippet = read_content(&content)?;
    }

    validate_snippet(current, &snippet)
        .with_context(|| format!("Could not save snippet \"{}\"", snippet.name))?;

    store
        .save_snippet(&snippet)
        .await
        .with_context(|| format!("Could not save snippet \"{}\"", snippet.name))?;

    info!(collector_id, name = %snippet.name, "snippet updated");
    println!("Snippet \"{}\" successfully updated", snippet.name);

    if let Some(current) = store.current() {
        println!("{}", format_snippets(&current.snippets, format)?);
    }
    Ok(())
}

async fn delete(
    config: Config,
    collector_id: &str,
    snippet_id: &str,
    yes: bool,
    format: OutputFormat,
) -> Result<()> {
    let mut store = build_store(&config, collector_id)?;
    let current = store
        .refresh()
        .await
        .context("Could not retrieve configuration")?;
    let name = current
        .snippets
        .iter()
        .find(|s| s.id == snippet_id)
        .map(|s| s.name.clone());

    if !yes {
        let prompt = match &name {
            Some(name) => format!("Delete snippet \"{name}\" ({snippet_id})? [y/N] "),
            None => format!("Delete snippet {snippet_id}? [y/N] "),
        };
        if !confirm(&prompt)? {
            println!("Aborted.");
            return Ok(());
        }
    }

    let label = entity_label(name.as_deref(), snippet_id).to_string();
    store
        .delete_snippet(snippet_id)
        .await
        .with_context(|| format!("Could not delete snippet \"{label}\""))?;

    info!(collector_id, snippet_id, "snippet deleted");
    println!("Snippet \"{label}\" successfully deleted");

    if let Some(current) = store.current() {
        println!("{}", format_snippets(&current.snippets, format)?);
    }
    Ok(())
}

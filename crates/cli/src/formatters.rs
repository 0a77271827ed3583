//! Output rendering for CLI commands.
//!
//! Responsibilities:
//! - Render collectors, configurations, and entity collections as plain
//!   tables or JSON.
//!
//! Does NOT handle:
//! - Writing to files or pagination; output goes to stdout as-is.

use anyhow::{Result, bail};
use collector_client::{CollectorSummary, Configuration, Input, Output, Snippet};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    /// Parse a format name given on the command line.
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => bail!("unsupported output format \"{other}\" (expected table or json)"),
        }
    }
}

fn properties_summary(properties: &std::collections::BTreeMap<String, String>) -> String {
    properties
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the collector list.
pub fn format_collectors(collectors: &[CollectorSummary], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(collectors)?);
    }

    if collectors.is_empty() {
        return Ok("No collectors registered.".to_string());
    }

    let mut out = format!(
        "{:<24} {:<16} {:<10} {:<26} {}\n",
        "ID", "NODE", "VERSION", "LAST SEEN", "ACTIVE"
    );
    for collector in collectors {
        out.push_str(&format!(
            "{:<24} {:<16} {:<10} {:<26} {}\n",
            collector.id,
            collector.node_id,
            collector.collector_version.as_deref().unwrap_or("-"),
            collector.last_seen.as_deref().unwrap_or("-"),
            if collector.active { "yes" } else { "no" }
        ));
    }
    Ok(out)
}

/// Render a table of inputs.
pub fn format_inputs(inputs: &[Input], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(inputs)?);
    }

    if inputs.is_empty() {
        return Ok("No inputs configured.".to_string());
    }

    let mut out = format!(
        "{:<26} {:<24} {:<8} {:<20} {}\n",
        "ID", "NAME", "TYPE", "FORWARD TO", "PROPERTIES"
    );
    for input in inputs {
        out.push_str(&format!(
            "{:<26} {:<24} {:<8} {:<20} {}\n",
            input.id,
            input.name,
            input.input_type,
            input.forward_to,
            properties_summary(&input.properties)
        ));
    }
    Ok(out)
}

/// Render a table of outputs.
pub fn format_outputs(outputs: &[Output], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(outputs)?);
    }

    if outputs.is_empty() {
        return Ok("No outputs configured.".to_string());
    }

    let mut out = format!("{:<26} {:<24} {:<8} {}\n", "ID", "NAME", "TYPE", "PROPERTIES");
    for output in outputs {
        out.push_str(&format!(
            "{:<26} {:<24} {:<8} {}\n",
            output.id,
            output.name,
            output.output_type,
            properties_summary(&output.properties)
        ));
    }
    Ok(out)
}

/// Render a table of snippets. The raw text is summarized by line count
/// rather than inlined.
pub fn format_snippets(snippets: &[Snippet], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(snippets)?);
    }

    if snippets.is_empty() {
        return Ok("No snippets configured.".to_string());
    }

    let mut out = format!("{:<26} {:<24} {:<8} {}\n", "ID", "NAME", "TYPE", "CONTENT");
    for snippet in snippets {
        out.push_str(&format!(
            "{:<26} {:<24} {:<8} {} line(s)\n",
            snippet.id,
            snippet.name,
            snippet.snippet_type,
            snippet.snippet.lines().count()
        ));
    }
    Ok(out)
}

/// Render a full configuration as three sections.
pub fn format_configuration(configuration: &Configuration, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(configuration)?);
    }

    let mut out = format!("Configuration for collector {}\n\n", configuration.collector_id);
    out.push_str("Inputs:\n");
    out.push_str(&format_inputs(&configuration.inputs, format)?);
    out.push_str("\nOutputs:\n");
    out.push_str(&format_outputs(&configuration.outputs, format)?);
    out.push_str("\nSnippets:\n");
    out.push_str(&format_snippets(&configuration.snippets, format)?);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(OutputFormat::parse("table").unwrap(), OutputFormat::Table);
        assert_eq!(OutputFormat::parse("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::parse("xml").is_err());
    }

    #[test]
    fn test_format_collectors_table() {
        let collectors = vec![CollectorSummary {
            id: "collector-1".to_string(),
            node_id: "node-a".to_string(),
            collector_version: Some("0.5.0".to_string()),
            last_seen: None,
            active: true,
        }];
        let table = format_collectors(&collectors, OutputFormat::Table).unwrap();
        assert!(table.contains("collector-1"));
        assert!(table.contains("yes"));
    }

    #[test]
    fn test_format_inputs_empty() {
        let table = format_inputs(&[], OutputFormat::Table).unwrap();
        assert_eq!(table, "No inputs configured.");
    }

    #[test]
    fn test_format_configuration_json_round_trips() {
        let configuration = Configuration {
            collector_id: "collector-1".to_string(),
            ..Configuration::default()
        };
        let json = format_configuration(&configuration, OutputFormat::Json).unwrap();
        let parsed: Configuration = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, configuration);
    }
}

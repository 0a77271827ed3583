//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see the `commands` module).

use std::time::Duration;

use clap::{Parser, Subcommand};
use collector_config::{Config, ConfigError, ConfigLoader};

#[derive(Parser)]
#[command(name = "collector-cli")]
#[command(about = "Manage log-collector configurations from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  collector-cli collectors\n  collector-cli configuration collector-1\n  collector-cli inputs create collector-1 --name windows-eventlog --forward-to gelf-udp --property Module=im_msvistalog\n  collector-cli outputs delete collector-1 56d6f5a1b2c3d4e5f6a7b8cb --yes\n"
)]
pub struct Cli {
    /// Base URL of the server API (e.g., http://localhost:9000/api)
    #[arg(short, long, global = true, env = "COLLECTOR_BASE_URL")]
    pub base_url: Option<String>,

    /// REST namespace of the collector plugin under the base URL
    #[arg(long, global = true, env = "COLLECTOR_API_PREFIX")]
    pub api_prefix: Option<String>,

    /// Username for basic authentication
    #[arg(short, long, global = true, env = "COLLECTOR_USERNAME")]
    pub username: Option<String>,

    /// Password for basic authentication
    #[arg(short, long, global = true, env = "COLLECTOR_PASSWORD")]
    pub password: Option<String>,

    /// API token for authentication (preferred over username/password)
    #[arg(short = 't', long, global = true, env = "COLLECTOR_API_TOKEN")]
    pub api_token: Option<String>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true, env = "COLLECTOR_SKIP_VERIFY")]
    pub skip_verify: bool,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "COLLECTOR_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Output format (table, json)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Build the configuration from CLI flags with environment fallbacks.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        ConfigLoader::new()
            .with_base_url(self.base_url.clone())
            .with_api_prefix(self.api_prefix.clone())
            .with_username(self.username.clone())
            .with_password(self.password.clone())
            .with_api_token(self.api_token.clone())
            .with_skip_verify(if self.skip_verify { Some(true) } else { None })
            .with_timeout(self.timeout.map(Duration::from_secs))
            .load()
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List collectors registered with the server
    Collectors,

    /// Show the full configuration of a collector
    Configuration {
        /// Id of the collector
        collector_id: String,
    },

    /// Manage a collector's inputs
    Inputs {
        #[command(subcommand)]
        command: InputCommands,
    },

    /// Manage a collector's outputs
    Outputs {
        #[command(subcommand)]
        command: OutputCommands,
    },

    /// Manage a collector's configuration snippets
    Snippets {
        #[command(subcommand)]
        command: SnippetCommands,
    },
}

#[derive(Subcommand)]
pub enum InputCommands {
    /// List the inputs of a collector
    List { collector_id: String },

    /// Create a new input
    Create {
        collector_id: String,
        /// Input name, unique among the collector's inputs
        #[arg(long)]
        name: String,
        /// Name of the output to forward to
        #[arg(long)]
        forward_to: String,
        /// Collector backend type
        #[arg(long, default_value = "nxlog")]
        input_type: String,
        /// Backend property as KEY=VALUE (repeatable)
        #[arg(long = "property", value_name = "KEY=VALUE")]
        properties: Vec<String>,
    },

    /// Update an existing input
    Update {
        collector_id: String,
        input_id: String,
        /// New input name
        #[arg(long)]
        name: Option<String>,
        /// New forward-to output name
        #[arg(long)]
        forward_to: Option<String>,
        /// Replacement backend property as KEY=VALUE (repeatable; replaces
        /// the full property set when given)
        #[arg(long = "property", value_name = "KEY=VALUE")]
        properties: Vec<String>,
    },

    /// Delete an input
    Delete {
        collector_id: String,
        input_id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum OutputCommands {
    /// List the outputs of a collector
    List { collector_id: String },

    /// Create a new output
    Create {
        collector_id: String,
        /// Output name, unique among the collector's outputs
        #[arg(long)]
        name: String,
        /// Collector backend type
        #[arg(long, default_value = "nxlog")]
        output_type: String,
        /// Backend property as KEY=VALUE (repeatable)
        #[arg(long = "property", value_name = "KEY=VALUE")]
        properties: Vec<String>,
    },

    /// Update an existing output
    Update {
        collector_id: String,
        output_id: String,
        /// New output name
        #[arg(long)]
        name: Option<String>,
        /// Replacement backend property as KEY=VALUE (repeatable; replaces
        /// the full property set when given)
        #[arg(long = "property", value_name = "KEY=VALUE")]
        properties: Vec<String>,
    },

    /// Delete an output
    Delete {
        collector_id: String,
        output_id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum SnippetCommands {
    /// List the snippets of a collector
    List { collector_id: String },

    /// Create a new snippet
    Create {
        collector_id: String,
        /// Snippet name, unique among the collector's snippets
        #[arg(long)]
        name: String,
        /// Collector backend type the fragment applies to
        #[arg(long, default_value = "nxlog")]
        snippet_type: String,
        /// Raw configuration text; `-` reads from stdin
        #[arg(long)]
        content: String,
    },

    /// Update an existing snippet
    Update {
        collector_id: String,
        snippet_id: String,
        /// New snippet name
        #[arg(long)]
        name: Option<String>,
        /// New raw configuration text; `-` reads from stdin
        #[arg(long)]
        content: Option<String>,
    },

    /// Delete a snippet
    Delete {
        collector_id: String,
        snippet_id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_collectors() {
        let cli = Cli::try_parse_from(["collector-cli", "collectors"]).unwrap();
        assert!(matches!(cli.command, Commands::Collectors));
        assert_eq!(cli.output, "table");
    }

    #[test]
    fn test_parse_input_create_with_properties() {
        let cli = Cli::try_parse_from([
            "collector-cli",
            "inputs",
            "create",
            "collector-1",
            "--name",
            "windows-eventlog",
            "--forward-to",
            "gelf-udp",
            "--property",
            "Module=im_msvistalog",
            "--property",
            "SavePos=TRUE",
        ])
        .unwrap();

        match cli.command {
            Commands::Inputs {
                command:
                    InputCommands::Create {
                        collector_id,
                        name,
                        forward_to,
                        input_type,
                        properties,
                    },
            } => {
                assert_eq!(collector_id, "collector-1");
                assert_eq!(name, "windows-eventlog");
                assert_eq!(forward_to, "gelf-udp");
                assert_eq!(input_type, "nxlog");
                assert_eq!(properties.len(), 2);
            }
            _ => panic!("expected inputs create"),
        }
    }

    #[test]
    fn test_parse_delete_with_yes() {
        let cli = Cli::try_parse_from([
            "collector-cli",
            "outputs",
            "delete",
            "collector-1",
            "o1",
            "--yes",
        ])
        .unwrap();

        match cli.command {
            Commands::Outputs {
                command: OutputCommands::Delete { output_id, yes, .. },
            } => {
                assert_eq!(output_id, "o1");
                assert!(yes);
            }
            _ => panic!("expected outputs delete"),
        }
    }

    #[test]
    fn test_create_requires_name() {
        let result = Cli::try_parse_from([
            "collector-cli",
            "inputs",
            "create",
            "collector-1",
            "--forward-to",
            "gelf-udp",
        ]);
        assert!(result.is_err());
    }
}

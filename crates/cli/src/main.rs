//! Collector CLI - command-line editor for collector configurations.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Execute collector REST API commands via the shared client library.
//! - Format and display results as tables or JSON.
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//! - Server-side validation; only name rules are checked locally.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap
//!   env defaults.
//! - Failures print a message and map to a structured exit code; they never
//!   panic.

mod args;
mod commands;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use collector_config::ConfigLoader;
use error::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env before CLI parsing so clap env defaults can read .env values.
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {e}");
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    if let Err(e) = commands::run(config, cli.command, &cli.output).await {
        eprintln!("Error: {e:#}");
        std::process::exit(ExitCode::from_error(&e).as_i32());
    }
    std::process::exit(ExitCode::Success.as_i32());
}

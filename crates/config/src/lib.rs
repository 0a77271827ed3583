//! Configuration management for the collector CLI.
//!
//! This crate provides types and loaders for the collector API connection
//! configuration, sourced from environment variables, `.env` files, and
//! command-line overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, AuthStrategy, Config, ConnectionConfig};

//! Collector configuration REST API client.
//!
//! This crate provides a type-safe client for the collector plugin REST API:
//! listing registered collectors, fetching a collector's configuration, and
//! creating, updating, and deleting inputs, outputs, and configuration
//! snippets. It also provides [`ConfigurationStore`], which keeps a local
//! snapshot of one collector's configuration and reloads it in full after
//! every successful mutation, and the editor-side name validation rules.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
mod store;
pub mod validate;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use auth::AuthStrategy;
pub use client::CollectorClient;
pub use client::builder::CollectorClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    CollectorListResponse, CollectorSummary, Configuration, Input, InputListResponse, Output,
    OutputListResponse, Snippet, SnippetListResponse,
};
pub use store::ConfigurationStore;
pub use validate::{EntityKind, ValidationError, validate_input, validate_output, validate_snippet};

//! Main collector API client and API methods.
//!
//! This module provides the primary [`CollectorClient`] for interacting with
//! the collector plugin REST API.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `configuration`: Collector list and configuration fetch methods
//! - `inputs` / `outputs` / `snippets`: Per-resource save/delete methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Reload-after-write bookkeeping (see [`crate::store::ConfigurationStore`])
//! - Name validation (see [`crate::validate`]; the caller validates before
//!   saving)

pub mod builder;

mod configuration;
mod inputs;
mod outputs;
mod snippets;

use crate::auth::AuthStrategy;

/// Collector plugin REST API client.
///
/// # Creating a client
///
/// Use [`CollectorClient::builder()`]:
///
/// ```rust,ignore
/// use collector_client::{AuthStrategy, CollectorClient};
/// use secrecy::SecretString;
///
/// let client = CollectorClient::builder()
///     .base_url("http://localhost:9000/api".to_string())
///     .auth_strategy(AuthStrategy::ApiToken {
///         token: SecretString::new("my-token".to_string().into()),
///     })
///     .build()?;
/// ```
#[derive(Debug)]
pub struct CollectorClient {
    pub(crate) http: reqwest::Client,
    pub(crate) namespace_url: String,
    pub(crate) auth: AuthStrategy,
}

impl CollectorClient {
    /// Create a new client builder.
    pub fn builder() -> builder::CollectorClientBuilder {
        builder::CollectorClientBuilder::new()
    }

    /// The fully qualified URL of the collector plugin namespace.
    pub fn namespace_url(&self) -> &str {
        &self.namespace_url
    }
}

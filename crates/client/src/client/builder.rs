//! Client builder for constructing [`CollectorClient`] instances.
//!
//! Responsibilities:
//! - Provide a fluent builder API for client configuration
//! - Validate required configuration (base_url, auth_strategy)
//! - Normalize the base URL and namespace prefix (no trailing slashes)
//! - Configure the underlying HTTP client (timeout, TLS verification)
//!
//! Invariants:
//! - `base_url` and `auth_strategy` must be provided before calling `build()`
//! - `skip_verify` only affects HTTPS connections; HTTP URLs log a warning

use std::time::Duration;

use collector_config::constants::{DEFAULT_API_PREFIX, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS};
use collector_config::{AuthStrategy as ConfigAuthStrategy, Config};

use crate::auth::AuthStrategy;
use crate::client::CollectorClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`CollectorClient`].
pub struct CollectorClientBuilder {
    base_url: Option<String>,
    api_prefix: String,
    auth_strategy: Option<AuthStrategy>,
    skip_verify: bool,
    timeout: Duration,
}

impl Default for CollectorClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            auth_strategy: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl CollectorClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the server API, e.g. `http://localhost:9000/api`.
    ///
    /// Trailing slashes are removed automatically.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the REST namespace of the collector plugin under the base URL.
    ///
    /// Defaults to `/plugins/org.graylog.plugins.collector`.
    pub fn api_prefix(mut self, prefix: String) -> Self {
        self.api_prefix = prefix;
        self
    }

    /// Set the authentication strategy.
    pub fn auth_strategy(mut self, strategy: AuthStrategy) -> Self {
        self.auth_strategy = Some(strategy);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this in development or testing environments.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Pre-populate the builder from a loaded [`Config`].
    pub fn from_config(mut self, config: &Config) -> Self {
        let auth_strategy = match &config.auth.strategy {
            ConfigAuthStrategy::Basic { username, password } => AuthStrategy::Basic {
                username: username.clone(),
                password: password.clone(),
            },
            ConfigAuthStrategy::ApiToken { token } => AuthStrategy::ApiToken {
                token: token.clone(),
            },
        };

        self.base_url = Some(config.connection.base_url.clone());
        self.api_prefix = config.connection.api_prefix.clone();
        self.auth_strategy = Some(auth_strategy);
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self
    }

    /// Build the [`CollectorClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided or
    /// the auth strategy is missing, and `ClientError::HttpError` if the HTTP
    /// client fails to build.
    pub fn build(self) -> Result<CollectorClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = base_url.trim_end_matches('/');

        let auth = self
            .auth_strategy
            .ok_or_else(|| ClientError::InvalidUrl("auth_strategy is required".to_string()))?;

        let prefix = self.api_prefix.trim_end_matches('/');
        let namespace_url = if prefix.is_empty() {
            base_url.to_string()
        } else if prefix.starts_with('/') {
            format!("{base_url}{prefix}")
        } else {
            format!("{base_url}/{prefix}")
        };

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if namespace_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                // skip_verify only affects TLS certificate verification; it
                // has no effect on plain HTTP connections.
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(CollectorClient {
            http,
            namespace_url,
            auth,
        })
    }
}

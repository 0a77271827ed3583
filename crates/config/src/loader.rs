//! Configuration loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Load connection and auth settings from `COLLECTOR_*` environment
//!   variables, with builder-style overrides supplied by the CLI.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading
//!   in tests.
//!
//! Invariants:
//! - Explicit overrides take precedence over environment variables.
//! - An API token wins over username/password when both are present.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

use crate::constants::{
    DEFAULT_API_PREFIX, DEFAULT_TIMEOUT_SECS, ENV_API_PREFIX, ENV_API_TOKEN, ENV_BASE_URL,
    ENV_DOTENV_DISABLED, ENV_PASSWORD, ENV_SKIP_VERIFY, ENV_TIMEOUT, ENV_USERNAME,
};
use crate::types::{AuthConfig, AuthStrategy, Config, ConnectionConfig};

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Base URL is required (set COLLECTOR_BASE_URL or pass --base-url)")]
    MissingBaseUrl,

    #[error("Authentication is required (either username/password or an API token)")]
    MissingAuth,

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Failed to load .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),
}

/// Read an environment variable, treating empty values as unset.
pub fn env_var_or_none(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: format!("expected a boolean, got \"{other}\""),
        }),
    }
}

/// Configuration loader that builds a [`Config`] from environment variables
/// and explicit overrides.
#[derive(Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    api_prefix: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    api_token: Option<SecretString>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// Setting `DOTENV_DISABLED` to a truthy value skips loading entirely; a
    /// missing `.env` file is not an error.
    pub fn load_dotenv(&self) -> Result<(), ConfigError> {
        if let Some(value) = env_var_or_none(ENV_DOTENV_DISABLED) {
            if parse_bool(ENV_DOTENV_DISABLED, &value).unwrap_or(false) {
                tracing::debug!("dotenv loading disabled via {}", ENV_DOTENV_DISABLED);
                return Ok(());
            }
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "loaded .env file");
                Ok(())
            }
            Err(e) if e.not_found() => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, url: Option<String>) -> Self {
        self.base_url = url;
        self
    }

    /// Override the REST namespace.
    pub fn with_api_prefix(mut self, prefix: Option<String>) -> Self {
        self.api_prefix = prefix;
        self
    }

    /// Override the basic-auth username.
    pub fn with_username(mut self, username: Option<String>) -> Self {
        self.username = username;
        self
    }

    /// Override the basic-auth password.
    pub fn with_password(mut self, password: Option<String>) -> Self {
        self.password = password.map(|p| SecretString::new(p.into()));
        self
    }

    /// Override the API token.
    pub fn with_api_token(mut self, token: Option<String>) -> Self {
        self.api_token = token.map(|t| SecretString::new(t.into()));
        self
    }

    /// Override TLS verification skipping.
    pub fn with_skip_verify(mut self, skip: Option<bool>) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the final [`Config`], falling back to environment variables for
    /// anything not explicitly overridden.
    pub fn load(self) -> Result<Config, ConfigError> {
        let base_url = self
            .base_url
            .or_else(|| env_var_or_none(ENV_BASE_URL))
            .ok_or(ConfigError::MissingBaseUrl)?;

        let api_prefix = self
            .api_prefix
            .or_else(|| env_var_or_none(ENV_API_PREFIX))
            .unwrap_or_else(|| DEFAULT_API_PREFIX.to_string());

        let skip_verify = match self.skip_verify {
            Some(skip) => skip,
            None => match env_var_or_none(ENV_SKIP_VERIFY) {
                Some(value) => parse_bool(ENV_SKIP_VERIFY, &value)?,
                None => false,
            },
        };

        let timeout = match self.timeout {
            Some(timeout) => timeout,
            None => match env_var_or_none(ENV_TIMEOUT) {
                Some(value) => {
                    let secs: u64 = value.parse().map_err(|_| ConfigError::InvalidValue {
                        var: ENV_TIMEOUT.to_string(),
                        message: format!("expected seconds, got \"{value}\""),
                    })?;
                    Duration::from_secs(secs)
                }
                None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            },
        };

        let api_token = self
            .api_token
            .or_else(|| env_var_or_none(ENV_API_TOKEN).map(|t| SecretString::new(t.into())));
        let username = self.username.or_else(|| env_var_or_none(ENV_USERNAME));
        let password = self
            .password
            .or_else(|| env_var_or_none(ENV_PASSWORD).map(|p| SecretString::new(p.into())));

        let strategy = if let Some(token) = api_token {
            AuthStrategy::ApiToken { token }
        } else {
            match (username, password) {
                (Some(username), Some(password)) => AuthStrategy::Basic { username, password },
                _ => return Err(ConfigError::MissingAuth),
            }
        };

        Ok(Config {
            connection: ConnectionConfig {
                base_url,
                api_prefix,
                skip_verify,
                timeout,
            },
            auth: AuthConfig { strategy },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_VARS: [&str; 7] = [
        ENV_BASE_URL,
        ENV_API_PREFIX,
        ENV_USERNAME,
        ENV_PASSWORD,
        ENV_API_TOKEN,
        ENV_SKIP_VERIFY,
        ENV_TIMEOUT,
    ];

    fn with_clean_env<F: FnOnce()>(vars: Vec<(&str, Option<&str>)>, f: F) {
        let mut all: Vec<(&str, Option<&str>)> =
            ALL_VARS.iter().map(|v| (*v, None)).collect();
        for (name, value) in vars {
            if let Some(entry) = all.iter_mut().find(|(n, _)| *n == name) {
                entry.1 = value;
            }
        }
        temp_env::with_vars(all, f);
    }

    #[test]
    fn test_load_from_env_with_token() {
        with_clean_env(
            vec![
                (ENV_BASE_URL, Some("http://localhost:9000/api")),
                (ENV_API_TOKEN, Some("token123")),
            ],
            || {
                let config = ConfigLoader::new().load().unwrap();
                assert_eq!(config.connection.base_url, "http://localhost:9000/api");
                assert_eq!(config.connection.api_prefix, DEFAULT_API_PREFIX);
                assert!(matches!(
                    config.auth.strategy,
                    AuthStrategy::ApiToken { .. }
                ));
            },
        );
    }

    #[test]
    fn test_token_wins_over_basic_auth() {
        with_clean_env(
            vec![
                (ENV_BASE_URL, Some("http://localhost:9000/api")),
                (ENV_USERNAME, Some("admin")),
                (ENV_PASSWORD, Some("secret")),
                (ENV_API_TOKEN, Some("token123")),
            ],
            || {
                let config = ConfigLoader::new().load().unwrap();
                assert!(matches!(
                    config.auth.strategy,
                    AuthStrategy::ApiToken { .. }
                ));
            },
        );
    }

    #[test]
    fn test_missing_base_url() {
        with_clean_env(vec![(ENV_API_TOKEN, Some("token123"))], || {
            let err = ConfigLoader::new().load().unwrap_err();
            assert!(matches!(err, ConfigError::MissingBaseUrl));
        });
    }

    #[test]
    fn test_missing_auth() {
        with_clean_env(
            vec![(ENV_BASE_URL, Some("http://localhost:9000/api"))],
            || {
                let err = ConfigLoader::new().load().unwrap_err();
                assert!(matches!(err, ConfigError::MissingAuth));
            },
        );
    }

    #[test]
    fn test_username_without_password_is_missing_auth() {
        with_clean_env(
            vec![
                (ENV_BASE_URL, Some("http://localhost:9000/api")),
                (ENV_USERNAME, Some("admin")),
            ],
            || {
                let err = ConfigLoader::new().load().unwrap_err();
                assert!(matches!(err, ConfigError::MissingAuth));
            },
        );
    }

    #[test]
    fn test_overrides_take_precedence_over_env() {
        with_clean_env(
            vec![
                (ENV_BASE_URL, Some("http://env:9000/api")),
                (ENV_API_TOKEN, Some("env-token")),
                (ENV_TIMEOUT, Some("10")),
            ],
            || {
                let config = ConfigLoader::new()
                    .with_base_url(Some("http://cli:9000/api".to_string()))
                    .with_timeout(Some(Duration::from_secs(5)))
                    .load()
                    .unwrap();
                assert_eq!(config.connection.base_url, "http://cli:9000/api");
                assert_eq!(config.connection.timeout, Duration::from_secs(5));
            },
        );
    }

    #[test]
    fn test_invalid_skip_verify_value() {
        with_clean_env(
            vec![
                (ENV_BASE_URL, Some("http://localhost:9000/api")),
                (ENV_API_TOKEN, Some("token123")),
                (ENV_SKIP_VERIFY, Some("maybe")),
            ],
            || {
                let err = ConfigLoader::new().load().unwrap_err();
                assert!(matches!(err, ConfigError::InvalidValue { .. }));
            },
        );
    }

    #[test]
    fn test_invalid_timeout_value() {
        with_clean_env(
            vec![
                (ENV_BASE_URL, Some("http://localhost:9000/api")),
                (ENV_API_TOKEN, Some("token123")),
                (ENV_TIMEOUT, Some("soon")),
            ],
            || {
                let err = ConfigLoader::new().load().unwrap_err();
                assert!(matches!(err, ConfigError::InvalidValue { .. }));
            },
        );
    }
}

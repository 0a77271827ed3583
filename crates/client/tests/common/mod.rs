//! Common test utilities for integration tests.
//!
//! Provides the mock-server namespace helpers and a pre-configured client
//! so individual tests only describe the routes they exercise.

// Re-export test utilities from collector-client
#[allow(unused_imports)]
pub use collector_client::testing::load_fixture;

// Re-export commonly used types for test convenience
#[allow(unused_imports)]
pub use collector_client::{AuthStrategy, CollectorClient, ConfigurationStore};
#[allow(unused_imports)]
pub use wiremock::matchers::{body_json, body_partial_json, method, path};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use secrecy::SecretString;

/// REST namespace the default client is built against.
pub const NAMESPACE: &str = "/plugins/org.graylog.plugins.collector";

/// Qualify a path under the collector plugin namespace.
#[allow(dead_code)]
pub fn ns(path: &str) -> String {
    format!("{NAMESPACE}{path}")
}

/// Build a client pointed at a mock server, authenticating with a token.
#[allow(dead_code)]
pub fn test_client(server_uri: &str) -> CollectorClient {
    CollectorClient::builder()
        .base_url(server_uri.to_string())
        .auth_strategy(AuthStrategy::ApiToken {
            token: SecretString::new("test-token".to_string().into()),
        })
        .build()
        .expect("failed to build test client")
}

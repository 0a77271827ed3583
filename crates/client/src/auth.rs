//! Authentication strategies for the collector API.

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// How the client authenticates against the collector API.
///
/// The consumed API is stateless, so no session management is needed; the
/// credentials are attached to every request.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// HTTP basic authentication.
    Basic {
        username: String,
        password: SecretString,
    },
    /// Bearer token authentication.
    ApiToken { token: SecretString },
}

impl AuthStrategy {
    /// Attach the credentials to a request.
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Basic { username, password } => {
                builder.basic_auth(username, Some(password.expose_secret()))
            }
            Self::ApiToken { token } => builder.bearer_auth(token.expose_secret()),
        }
    }
}

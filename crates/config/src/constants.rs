//! Shared configuration defaults and environment variable names.

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Default REST namespace of the collector plugin on the server.
pub const DEFAULT_API_PREFIX: &str = "/plugins/org.graylog.plugins.collector";

/// Environment variable holding the server base URL.
pub const ENV_BASE_URL: &str = "COLLECTOR_BASE_URL";

/// Environment variable holding the REST namespace override.
pub const ENV_API_PREFIX: &str = "COLLECTOR_API_PREFIX";

/// Environment variable holding the basic-auth username.
pub const ENV_USERNAME: &str = "COLLECTOR_USERNAME";

/// Environment variable holding the basic-auth password.
pub const ENV_PASSWORD: &str = "COLLECTOR_PASSWORD";

/// Environment variable holding an API token (preferred over basic auth).
pub const ENV_API_TOKEN: &str = "COLLECTOR_API_TOKEN";

/// Environment variable toggling TLS certificate verification.
pub const ENV_SKIP_VERIFY: &str = "COLLECTOR_SKIP_VERIFY";

/// Environment variable holding the request timeout in seconds.
pub const ENV_TIMEOUT: &str = "COLLECTOR_TIMEOUT";

/// Environment variable that disables `.env` loading entirely.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

//! Client configuration for connecting to the platform API.

use std::time::Duration;

/// Default base URL for a local platform instance.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8086";

/// Default HTTP request timeout (30 seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings shared by every call made through one transport.
///
/// The configuration is plain data; it is consumed by
/// [`HttpTransport::new`](crate::transport::HttpTransport::new) and not
/// referenced afterwards.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the platform API, without the `/api/v2` prefix.
    pub base_url: String,

    /// API token sent as `Authorization: Token <t>` when present.
    pub auth_token: Option<String>,

    /// Per-request timeout.
    pub timeout: Duration,

    /// User-Agent header value.
    pub user_agent: String,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// Create a configuration for the given base URL with default settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Attach an API token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            auth_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("FluxPack/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

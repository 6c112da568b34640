//! reqwest-backed transport implementation.

use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::config::ClientConfig;

use super::error::{TransportError, TransportResult};
use super::traits::{ApiRequest, Method, Transport};

/// HTTP implementation of [`Transport`].
///
/// Holds a pooled `reqwest::Client`, the base URL, and the optional API
/// token. One instance is intended to be shared across all calls made
/// through one `PackagesApi`; it keeps no per-call state.
///
/// # Example
///
/// ```ignore
/// use fluxpack::config::ClientConfig;
/// use fluxpack::transport::HttpTransport;
///
/// let config = ClientConfig::new("http://localhost:8086");
/// let transport = HttpTransport::new(&config)?;
/// ```
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
    timeout: Duration,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

impl HttpTransport {
    /// Build a transport from client configuration.
    pub fn new(config: &ClientConfig) -> TransportResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .build()
            .map_err(|e| TransportError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            // Trailing slash would double up against the /api/v2 paths.
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone(),
            timeout: config.timeout,
        })
    }
}

impl Transport for HttpTransport {
    async fn send(&self, req: ApiRequest) -> TransportResult<Vec<u8>> {
        let url = format!("{}{}", self.base_url, req.path);
        trace!(method = req.method.as_str(), url = %url, "dispatching API request");

        let mut builder = self.client.request(req.method.into(), &url);

        if !req.query.is_empty() {
            builder = builder.query(req.query.pairs());
        }

        if let Some(token) = &self.auth_token {
            builder = builder.header("Authorization", format!("Token {token}"));
        }

        if let Some(body) = &req.body {
            let bytes =
                serde_json::to_vec(body).map_err(|e| TransportError::Json(e.to_string()))?;
            builder = builder
                .header("Content-Type", "application/json")
                .body(bytes);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                warn!(url = %url, timeout_secs = self.timeout.as_secs(), "API request timed out");
                TransportError::Timeout {
                    url: url.clone(),
                    timeout_secs: self.timeout.as_secs(),
                }
            } else {
                warn!(url = %url, error = %e, is_connect = e.is_connect(), "API request failed");
                TransportError::Http(e.to_string())
            }
        })?;

        let status = response.status();
        debug!(url = %url, status = status.as_u16(), "API response received");

        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "API error status");
            let message = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                url,
                message,
            });
        }

        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| TransportError::Http(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation() {
        let config = ClientConfig::new("http://localhost:8086");
        let transport = HttpTransport::new(&config).unwrap();
        assert_eq!(transport.base_url, "http://localhost:8086");
        assert_eq!(transport.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let config = ClientConfig::new("http://localhost:8086/");
        let transport = HttpTransport::new(&config).unwrap();
        assert_eq!(transport.base_url, "http://localhost:8086");
    }

    #[test]
    fn test_debug_omits_token() {
        let config = ClientConfig::new("http://localhost:8086").with_token("secret");
        let transport = HttpTransport::new(&config).unwrap();
        assert!(!format!("{transport:?}").contains("secret"));
    }

    // Note: network-dependent behavior (status mapping, timeouts) is not
    // unit-tested here; the facade tests exercise the contract against a
    // recording transport instead.
}

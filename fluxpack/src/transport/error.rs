//! Error types for the API transport.

use thiserror::Error;

/// Result alias for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors produced by the transport layer.
///
/// The facade forwards these untouched; callers interpret them. There is
/// deliberately no distinction between "resource missing" and any other
/// non-2xx status beyond the status code itself.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The underlying HTTP client could not be constructed.
    #[error("failed to create HTTP client: {0}")]
    ClientBuild(String),

    /// The HTTP request failed before a response arrived.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The request exceeded the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout { url: String, timeout_secs: u64 },

    /// The server answered with a non-2xx status.
    #[error("HTTP {status} from {url}: {message}")]
    Status {
        status: u16,
        url: String,
        message: String,
    },

    /// A request body could not be encoded or a response body decoded.
    #[error("failed to decode JSON: {0}")]
    Json(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = TransportError::Status {
            status: 404,
            url: "http://localhost:8086/api/v2/packages/stacks/abc".to_string(),
            message: "stack not found".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("404"));
        assert!(rendered.contains("stack not found"));
    }

    #[test]
    fn test_timeout_error_display() {
        let err = TransportError::Timeout {
            url: "http://localhost:8086/api/v2/packages".to_string(),
            timeout_secs: 30,
        };
        assert!(err.to_string().contains("timed out after 30s"));
    }
}

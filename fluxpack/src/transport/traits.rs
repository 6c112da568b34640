//! Transport trait and request description types.
//!
//! [`ApiRequest`] is deliberately independent of any HTTP crate so that
//! test doubles can implement [`Transport`] without pulling in reqwest
//! types.

use std::future::Future;
use std::sync::Arc;

use serde_json::Value;

use super::error::TransportResult;

/// HTTP verb for an API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    /// The verb as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered whitelist of query parameters.
///
/// Callers name exactly the fields that become query parameters; nothing
/// else ever reaches the query string, and declaration order is
/// preserved on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a required parameter.
    pub fn required(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.pairs.push((name, value.into()));
        self
    }

    /// Append a parameter only when a value is present.
    pub fn optional(mut self, name: &'static str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.pairs.push((name, value.to_string()));
        }
        self
    }

    /// Whether any parameters were declared.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The declared pairs, in declaration order.
    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    /// Render the query as a percent-encoded `k=v&k2=v2` string.
    pub fn encode(&self) -> String {
        serde_urlencoded::to_string(&self.pairs).unwrap_or_default()
    }
}

/// A complete description of one API round trip.
///
/// One value is constructed per call, consumed exactly once by the
/// transport, and never reused.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the base URL, with path parameters already
    /// interpolated (e.g. `/api/v2/packages/stacks/abc`).
    pub path: String,
    pub query: Query,
    /// JSON body, sent as `application/json` when present.
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Describe a call with no query parameters and no body.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Query::new(),
            body: None,
        }
    }

    /// Attach query parameters.
    pub fn with_query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    /// Attach a JSON body.
    pub fn with_json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Path plus encoded query string, as the transport will target it.
    pub fn url(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query.encode())
        }
    }
}

/// Capability for dispatching API requests.
///
/// Implementations perform exactly one round trip per call and return
/// the raw response body. They must not retry, cache, or reorder calls;
/// two concurrent `send`s are dispatched independently.
pub trait Transport: Send + Sync {
    /// Dispatch one request and return the response body bytes.
    fn send(&self, req: ApiRequest) -> impl Future<Output = TransportResult<Vec<u8>>> + Send;
}

/// A transport behind an `Arc` is itself a transport, so one connection
/// handle can back several facades.
impl<T: Transport> Transport for Arc<T> {
    fn send(&self, req: ApiRequest) -> impl Future<Output = TransportResult<Vec<u8>>> + Send {
        (**self).send(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_as_str() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Post.as_str(), "POST");
        assert_eq!(Method::Patch.as_str(), "PATCH");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }

    #[test]
    fn test_query_preserves_declaration_order() {
        let query = Query::new()
            .required("orgID", "o1")
            .optional("name", Some("n1"))
            .optional("stackID", Some("s1"));

        assert_eq!(query.encode(), "orgID=o1&name=n1&stackID=s1");
    }

    #[test]
    fn test_query_skips_absent_optionals() {
        let query = Query::new()
            .required("orgID", "o1")
            .optional("name", None)
            .optional("stackID", None);

        assert_eq!(query.pairs().len(), 1);
        assert_eq!(query.encode(), "orgID=o1");
    }

    #[test]
    fn test_query_percent_encodes_values() {
        let query = Query::new().required("name", "my stack");
        assert_eq!(query.encode(), "name=my+stack");
    }

    #[test]
    fn test_empty_query_omitted_from_url() {
        let req = ApiRequest::new(Method::Get, "/api/v2/packages/stacks/abc");
        assert_eq!(req.url(), "/api/v2/packages/stacks/abc");
    }

    #[test]
    fn test_url_appends_query() {
        let req = ApiRequest::new(Method::Delete, "/api/v2/packages/stacks/abc")
            .with_query(Query::new().required("orgID", "o1"));
        assert_eq!(req.url(), "/api/v2/packages/stacks/abc?orgID=o1");
    }
}

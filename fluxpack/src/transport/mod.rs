//! Transport abstraction for the platform's v2 REST API.
//!
//! The [`Transport`] trait is the seam between the typed facade in
//! [`packages`](crate::packages) and the wire: one [`ApiRequest`] fully
//! describes one round trip, and the transport owns everything below it
//! (connection pooling, authentication headers, timeouts, status
//! handling). Tests substitute a recording double; production code uses
//! the reqwest-backed [`HttpTransport`].

mod error;
mod http;
mod traits;

pub use error::{TransportError, TransportResult};
pub use http::HttpTransport;
pub use traits::{ApiRequest, Method, Query, Transport};

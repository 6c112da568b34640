//! FluxPack - typed client for a time-series platform's packages and
//! stacks REST API.
//!
//! This library maps the eight `/api/v2/packages` operations (create and
//! apply a package; list, create, read, update, delete, and export
//! stacks) onto a shared [`transport::Transport`] capability. The facade
//! in [`packages`] performs no work beyond verb selection, URL
//! construction, and query-parameter whitelisting; everything wire-level
//! lives behind the transport.
//!
//! # High-Level API
//!
//! ```ignore
//! use fluxpack::config::ClientConfig;
//! use fluxpack::packages::{PackagesApi, StackListFilter};
//! use fluxpack::transport::HttpTransport;
//!
//! let config = ClientConfig::new("https://platform.example.com").with_token("secret");
//! let api = PackagesApi::new(HttpTransport::new(&config)?);
//!
//! let stacks = api
//!     .list_stacks(&StackListFilter::for_org("0000000000000001"))
//!     .await?;
//! ```

pub mod config;
pub mod packages;
pub mod transport;

/// Version of the FluxPack library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

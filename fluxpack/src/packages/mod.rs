//! Client facade for the `/api/v2/packages` endpoints.
//!
//! A *package* is a declarative bundle of platform resource definitions
//! that can be created and applied; a *stack* is a named, tracked
//! collection of resources materialized from applied packages. This
//! module maps the eight operations onto a shared
//! [`Transport`](crate::transport::Transport):
//!
//! ```text
//! PackagesApi
//!     │
//!     ├── create_pkg / apply_pkg        POST  /api/v2/packages[/apply]
//!     ├── list_stacks / create_stack    GET|POST /api/v2/packages/stacks
//!     ├── read / update / delete        GET|PATCH|DELETE .../stacks/{id}
//!     └── export_stack                  DELETE .../stacks/{id}/export
//! ```
//!
//! Each operation is a pure mapping from a request value to one wire
//! call; no retries, caching, or error translation happen here.

mod api;
mod types;

pub use api::PackagesApi;
pub use types::{
    Pkg, PkgApply, PkgCreate, PkgSummary, Stack, StackCreate, StackList, StackListFilter,
    StackUpdate,
};

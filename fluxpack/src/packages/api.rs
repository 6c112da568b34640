//! The packages/stacks API facade.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::transport::{ApiRequest, Method, Query, Transport, TransportError, TransportResult};

use super::types::{
    Pkg, PkgApply, PkgCreate, PkgSummary, Stack, StackCreate, StackList, StackListFilter,
    StackUpdate,
};

/// Path for package create/apply.
const PACKAGES_PATH: &str = "/api/v2/packages";

/// Path for the stacks collection.
const STACKS_PATH: &str = "/api/v2/packages/stacks";

/// Facade over the eight packages/stacks operations.
///
/// Owns a constructor-injected transport capability and nothing else: no
/// caching, no retries, no per-call state. Failures from the transport
/// surface to the caller untouched. The transport is used read-only, so
/// one `Arc`-wrapped transport can back several facades concurrently.
#[derive(Debug, Clone)]
pub struct PackagesApi<T: Transport> {
    transport: T,
}

impl<T: Transport> PackagesApi<T> {
    /// Create a facade over the given transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Create a package definition on the server.
    ///
    /// The package document is the full request body.
    pub async fn create_pkg(&self, pkg: &PkgCreate) -> TransportResult<Pkg> {
        let req = ApiRequest::new(Method::Post, PACKAGES_PATH).with_json(to_body(pkg)?);
        self.send_json(req).await
    }

    /// Apply (or dry-run) a package against a target organization.
    pub async fn apply_pkg(&self, apply: &PkgApply) -> TransportResult<PkgSummary> {
        let req = ApiRequest::new(Method::Post, format!("{PACKAGES_PATH}/apply"))
            .with_json(to_body(apply)?);
        self.send_json(req).await
    }

    /// List stacks in an organization, optionally narrowed by name or
    /// stack ID.
    pub async fn list_stacks(&self, filter: &StackListFilter) -> TransportResult<StackList> {
        let query = Query::new()
            .required("orgID", filter.org_id.clone())
            .optional("name", filter.name.as_deref())
            .optional("stackID", filter.stack_id.as_deref());
        let req = ApiRequest::new(Method::Get, STACKS_PATH).with_query(query);
        self.send_json(req).await
    }

    /// Create a stack.
    pub async fn create_stack(&self, stack: &StackCreate) -> TransportResult<Stack> {
        let req = ApiRequest::new(Method::Post, STACKS_PATH).with_json(to_body(stack)?);
        self.send_json(req).await
    }

    /// Read a stack by ID.
    pub async fn read_stack(&self, stack_id: &str) -> TransportResult<Stack> {
        self.send_json(ApiRequest::new(Method::Get, stack_path(stack_id)))
            .await
    }

    /// Update a stack's name, description, or URLs.
    pub async fn update_stack(
        &self,
        stack_id: &str,
        update: &StackUpdate,
    ) -> TransportResult<Stack> {
        let req = ApiRequest::new(Method::Patch, stack_path(stack_id)).with_json(to_body(update)?);
        self.send_json(req).await
    }

    /// Delete a stack. The organization ID travels as a query parameter;
    /// no body is sent and none is expected back.
    pub async fn delete_stack(&self, stack_id: &str, org_id: &str) -> TransportResult<()> {
        let req = ApiRequest::new(Method::Delete, stack_path(stack_id))
            .with_query(Query::new().required("orgID", org_id));
        self.transport.send(req).await?;
        Ok(())
    }

    /// Export a stack as a package document.
    ///
    /// Deployed servers register the export route under the DELETE verb,
    /// so this call goes out as DELETE despite being a read. Changing the
    /// verb breaks wire compatibility with existing servers.
    pub async fn export_stack(&self, stack_id: &str, org_id: &str) -> TransportResult<Pkg> {
        let req = ApiRequest::new(Method::Delete, format!("{STACKS_PATH}/{stack_id}/export"))
            .with_query(Query::new().required("orgID", org_id));
        self.send_json(req).await
    }

    /// Dispatch a request and decode the JSON response body.
    async fn send_json<R: DeserializeOwned>(&self, req: ApiRequest) -> TransportResult<R> {
        let bytes = self.transport.send(req).await?;
        serde_json::from_slice(&bytes).map_err(|e| TransportError::Json(e.to_string()))
    }
}

/// Interpolate a stack ID into the stacks path. The ID is not validated;
/// an empty ID simply yields a malformed path for the transport.
fn stack_path(stack_id: &str) -> String {
    format!("{STACKS_PATH}/{stack_id}")
}

/// Serialize a request value into a JSON body.
fn to_body<S: Serialize>(value: &S) -> TransportResult<serde_json::Value> {
    serde_json::to_value(value).map_err(|e| TransportError::Json(e.to_string()))
}

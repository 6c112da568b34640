//! Request and response shapes for the packages and stacks endpoints.
//!
//! These are pure data-transfer shapes: constructed by the caller,
//! serialized once, never retained or mutated by the facade. Response
//! types tolerate unknown server fields so that server-side additions do
//! not break deserialization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A package document to create. The payload is server-defined and
/// carried opaque; it is sent verbatim as the full request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PkgCreate(pub Value);

/// An apply (or dry-run) document, sent verbatim as the request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PkgApply(pub Value);

/// A package resource as returned by the server. Not interpreted
/// client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pkg(pub Value);

/// The result of applying a package.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PkgSummary(pub Value);

/// A named, tracked collection of resources materialized from one or
/// more applied packages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stack {
    pub id: String,
    #[serde(rename = "orgID")]
    pub org_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub urls: Vec<String>,
}

/// Request body for creating a stack. Optional fields are omitted from
/// the JSON entirely when absent, never serialized as null.
#[derive(Debug, Clone, Serialize)]
pub struct StackCreate {
    #[serde(rename = "orgID")]
    pub org_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<String>,
}

impl StackCreate {
    /// A minimal create request: organization and name only.
    pub fn new(org_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            org_id: org_id.into(),
            name: name.into(),
            description: None,
            urls: Vec::new(),
        }
    }
}

/// Request body for updating a stack. Only present fields are sent; the
/// server leaves the rest unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StackUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urls: Option<Vec<String>>,
}

/// Filter for listing stacks. `org_id` is required by the server; the
/// other fields narrow the listing when present.
#[derive(Debug, Clone)]
pub struct StackListFilter {
    pub org_id: String,
    pub name: Option<String>,
    pub stack_id: Option<String>,
}

impl StackListFilter {
    /// List every stack in an organization.
    pub fn for_org(org_id: impl Into<String>) -> Self {
        Self {
            org_id: org_id.into(),
            name: None,
            stack_id: None,
        }
    }
}

/// Response envelope for the stack listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct StackList {
    pub stacks: Vec<Stack>,
}

// crates/loadmark-contract/src/types.rs
// ============================================================================
// Module: Contract Types
// Description: Endpoint descriptor model shared by the server and harness.
// Purpose: Provide canonical shapes for documentation and live invocation.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! This module defines the declarative endpoint metadata model. Each route is
//! described once as an [`EndpointDescriptor`]; the same record renders
//! human-readable documentation and supplies the exact request parameters used
//! by the harness to invoke the live call.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Contract errors raised while rendering descriptor data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContractError {
    /// A path template references a parameter with no supplied value.
    #[error("missing value for path parameter `{0}`")]
    MissingPathParam(String),
    /// A path template segment is malformed.
    #[error("malformed path template segment `{0}`")]
    MalformedTemplate(String),
}

// ============================================================================
// SECTION: Descriptor Model
// ============================================================================

/// HTTP methods used by the mock endpoint surface.
///
/// # Invariants
/// - Variants are stable for serialization and route dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// HTTP GET.
    Get,
    /// HTTP POST.
    Post,
    /// HTTP PUT.
    Put,
    /// HTTP DELETE.
    Delete,
}

impl HttpMethod {
    /// Returns the canonical wire label for the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Where a recognized parameter travels in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamLocation {
    /// URL query string parameter.
    Query,
    /// Named path segment parameter.
    Path,
    /// Field inside the JSON request body.
    Body,
}

/// Value shape expected for a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    /// Free-form string value.
    String,
    /// Non-negative integer value.
    Integer,
}

/// One recognized input parameter for an endpoint.
///
/// # Invariants
/// - `name` is unique within a descriptor's parameter list.
/// - The set of specs describes exactly the fields the live handler reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSpec {
    /// Parameter name as it appears on the wire.
    pub name: String,
    /// Where the parameter travels.
    pub location: ParamLocation,
    /// Expected value shape.
    pub kind: ParamKind,
    /// Whether the live handler rejects requests missing this parameter.
    pub required: bool,
    /// Short human description for documentation rendering.
    pub description: String,
}

impl ParamSpec {
    /// Builds a parameter spec.
    #[must_use]
    pub fn new(
        name: &str,
        location: ParamLocation,
        kind: ParamKind,
        required: bool,
        description: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            location,
            kind,
            required,
            description: description.to_string(),
        }
    }
}

/// Static metadata describing one endpoint's contract.
///
/// # Invariants
/// - `(method, path_template)` uniquely identifies a route in the registry.
/// - `example_response` matches the real response shape for documentation.
/// - Immutable after construction; invocation state lives in the harness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    /// Stable machine identifier for CLI and harness lookup.
    pub name: String,
    /// Human-readable label for documentation cards.
    pub title: String,
    /// HTTP method for the route.
    pub method: HttpMethod,
    /// URL path template; may contain one named parameter such as `{id}`.
    pub path_template: String,
    /// One-line contract summary.
    pub description: String,
    /// Recognized inputs, exactly matching what the handler reads.
    pub params: Vec<ParamSpec>,
    /// Literal sample value matching the real response shape.
    pub example_response: Value,
}

impl EndpointDescriptor {
    /// Returns the parameter specs for a given location.
    pub fn params_at(&self, location: ParamLocation) -> impl Iterator<Item = &ParamSpec> {
        self.params.iter().filter(move |spec| spec.location == location)
    }
}

// ============================================================================
// SECTION: Path Rendering
// ============================================================================

/// Renders a path template by substituting `{name}` segments from `values`.
///
/// # Errors
///
/// Returns [`ContractError`] when a referenced parameter has no value or a
/// segment contains an unterminated brace.
pub fn render_path(
    template: &str,
    values: &BTreeMap<String, String>,
) -> Result<String, ContractError> {
    let mut segments = Vec::new();
    for segment in template.split('/') {
        if let Some(inner) = segment.strip_prefix('{') {
            let name = inner
                .strip_suffix('}')
                .ok_or_else(|| ContractError::MalformedTemplate(segment.to_string()))?;
            let value = values
                .get(name)
                .ok_or_else(|| ContractError::MissingPathParam(name.to_string()))?;
            segments.push(value.as_str());
        } else {
            segments.push(segment);
        }
    }
    Ok(segments.join("/"))
}

// ============================================================================
// SECTION: Tests
// ============================================================================

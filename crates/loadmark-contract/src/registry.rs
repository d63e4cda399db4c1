// crates/loadmark-contract/src/registry.rs
// ============================================================================
// Module: Endpoint Registry
// Description: Canonical ordered list of endpoint descriptors.
// Purpose: Drive documentation rendering and harness invocation from one table.
// Dependencies: serde_json, loadmark-contract::types
// ============================================================================

//! ## Overview
//! The registry is a pure data table: one [`EndpointDescriptor`] per route,
//! in declared route order. Rendering and invocation both iterate this list;
//! no descriptor carries behavior (see the generic harness dispatcher).

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::json;

use crate::types::EndpointDescriptor;
use crate::types::HttpMethod;
use crate::types::ParamKind;
use crate::types::ParamLocation;
use crate::types::ParamSpec;

// ============================================================================
// SECTION: Registry
// ============================================================================

/// Returns the canonical endpoint descriptors.
///
/// The order is intentional: it matches the declared route order and is
/// preserved in rendered documentation. Append new endpoints at the end.
#[must_use]
pub fn endpoint_descriptors() -> Vec<EndpointDescriptor> {
    vec![
        message_descriptor(),
        delayed_descriptor(),
        create_data_descriptor(),
        search_descriptor(),
        update_user_descriptor(),
        delete_user_descriptor(),
        health_descriptor(),
    ]
}

/// Looks up a descriptor by its stable name.
#[must_use]
pub fn find_descriptor(name: &str) -> Option<EndpointDescriptor> {
    endpoint_descriptors().into_iter().find(|descriptor| descriptor.name == name)
}

// ============================================================================
// SECTION: Descriptor Builders
// ============================================================================

/// Builds the descriptor for `GET /api/message`.
fn message_descriptor() -> EndpointDescriptor {
    EndpointDescriptor {
        name: "message".to_string(),
        title: "Quick Message".to_string(),
        method: HttpMethod::Get,
        path_template: "/api/message".to_string(),
        description: "Returns a simple message immediately.".to_string(),
        params: Vec::new(),
        example_response: json!({ "message": "Hello from backend!" }),
    }
}

/// Builds the descriptor for `GET /api/delayed`.
fn delayed_descriptor() -> EndpointDescriptor {
    EndpointDescriptor {
        name: "delayed".to_string(),
        title: "Delayed Response".to_string(),
        method: HttpMethod::Get,
        path_template: "/api/delayed".to_string(),
        description: "Returns a message after the requested delay in milliseconds; invalid or \
                      missing delays fall back to 5000 ms."
            .to_string(),
        params: vec![ParamSpec::new(
            "delay",
            ParamLocation::Query,
            ParamKind::Integer,
            false,
            "Delay in milliseconds before responding (default 5000).",
        )],
        example_response: json!({ "message": "This response was delayed by 3 seconds." }),
    }
}

/// Builds the descriptor for `POST /api/data`.
fn create_data_descriptor() -> EndpointDescriptor {
    EndpointDescriptor {
        name: "create-data".to_string(),
        title: "Create Data (POST)".to_string(),
        method: HttpMethod::Post,
        path_template: "/api/data".to_string(),
        description: "Validates a JSON body and echoes the received fields with a timestamp."
            .to_string(),
        params: vec![
            ParamSpec::new(
                "name",
                ParamLocation::Body,
                ParamKind::String,
                true,
                "Submitter name.",
            ),
            ParamSpec::new(
                "email",
                ParamLocation::Body,
                ParamKind::String,
                true,
                "Submitter email.",
            ),
            ParamSpec::new(
                "message",
                ParamLocation::Body,
                ParamKind::String,
                false,
                "Optional free-form message.",
            ),
        ],
        example_response: json!({
            "success": true,
            "received": {
                "name": "John Doe",
                "email": "john@example.com",
                "message": "Hello"
            },
            "timestamp": "2024-01-01T00:00:00Z"
        }),
    }
}

/// Builds the descriptor for `GET /api/search`.
fn search_descriptor() -> EndpointDescriptor {
    EndpointDescriptor {
        name: "search".to_string(),
        title: "Search with Parameters".to_string(),
        method: HttpMethod::Get,
        path_template: "/api/search".to_string(),
        description: "Generates synthetic search results for the query; limit caps at five \
                      generated rows while total stays fixed at 25."
            .to_string(),
        params: vec![
            ParamSpec::new(
                "query",
                ParamLocation::Query,
                ParamKind::String,
                true,
                "Search text echoed into every generated result.",
            ),
            ParamSpec::new(
                "limit",
                ParamLocation::Query,
                ParamKind::Integer,
                false,
                "Requested result count (default 10, at most 5 generated).",
            ),
            ParamSpec::new(
                "page",
                ParamLocation::Query,
                ParamKind::Integer,
                false,
                "Page number echoed back (default 1).",
            ),
        ],
        example_response: json!({
            "query": "test",
            "page": 1,
            "limit": 10,
            "total": 25,
            "results": [{
                "id": 1,
                "title": "Result 1 for \"test\"",
                "description": "This is a sample search result for query: test",
                "score": 85.5
            }]
        }),
    }
}

/// Builds the descriptor for `PUT /api/user/{id}`.
fn update_user_descriptor() -> EndpointDescriptor {
    EndpointDescriptor {
        name: "update-user".to_string(),
        title: "Update User (PUT)".to_string(),
        method: HttpMethod::Put,
        path_template: "/api/user/{id}".to_string(),
        description: "Confirms an update for the identified user, echoing the new fields."
            .to_string(),
        params: vec![
            ParamSpec::new(
                "id",
                ParamLocation::Path,
                ParamKind::String,
                true,
                "User identifier from the path.",
            ),
            ParamSpec::new(
                "name",
                ParamLocation::Body,
                ParamKind::String,
                true,
                "Updated name.",
            ),
            ParamSpec::new(
                "email",
                ParamLocation::Body,
                ParamKind::String,
                true,
                "Updated email.",
            ),
            ParamSpec::new(
                "status",
                ParamLocation::Body,
                ParamKind::String,
                false,
                "Updated status (default \"active\").",
            ),
        ],
        example_response: json!({
            "success": true,
            "message": "User 1 updated successfully",
            "updated": {
                "id": "1",
                "name": "John Doe",
                "email": "john@example.com",
                "status": "active"
            },
            "timestamp": "2024-01-01T00:00:00Z"
        }),
    }
}

/// Builds the descriptor for `DELETE /api/user/{id}`.
fn delete_user_descriptor() -> EndpointDescriptor {
    EndpointDescriptor {
        name: "delete-user".to_string(),
        title: "Delete User".to_string(),
        method: HttpMethod::Delete,
        path_template: "/api/user/{id}".to_string(),
        description: "Confirms a delete for the identified user without an existence check."
            .to_string(),
        params: vec![ParamSpec::new(
            "id",
            ParamLocation::Path,
            ParamKind::String,
            true,
            "User identifier from the path.",
        )],
        example_response: json!({
            "success": true,
            "message": "User 1 deleted successfully",
            "deletedId": "1",
            "timestamp": "2024-01-01T00:00:00Z"
        }),
    }
}

/// Builds the descriptor for `GET /api/health`.
fn health_descriptor() -> EndpointDescriptor {
    EndpointDescriptor {
        name: "health".to_string(),
        title: "Health Check".to_string(),
        method: HttpMethod::Get,
        path_template: "/api/health".to_string(),
        description: "Returns service status, uptime, and host-process memory counters."
            .to_string(),
        params: Vec::new(),
        example_response: json!({
            "status": "healthy",
            "timestamp": "2024-01-01T00:00:00Z",
            "uptime": 123.45,
            "memory": { "rss_bytes": 12_345_678_u64, "virtual_bytes": 98_765_432_u64 }
        }),
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

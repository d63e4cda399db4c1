// crates/loadmark-harness/src/invoker/tests.rs
// ============================================================================
// Module: Invoker Unit Tests
// Description: Validates request assembly helpers and configuration checks.
// Purpose: Pin body shaping, pretty-printing, and base URL validation.
// Dependencies: loadmark-contract, serde_json
// ============================================================================

//! ## Overview
//! Network-free checks of the dispatcher's building blocks. Live exchanges
//! against a running server are covered by the integration tests.

// ============================================================================
// SECTION: Lint Configuration
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    clippy::missing_docs_in_private_items,
    reason = "Test-only validation helpers use panic-based assertions for clarity."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use loadmark_contract::EndpointDescriptor;
use loadmark_contract::HttpMethod;
use loadmark_contract::ParamKind;
use loadmark_contract::ParamLocation;
use loadmark_contract::ParamSpec;
use loadmark_contract::find_descriptor;
use serde_json::Value;
use serde_json::json;

use super::HarnessError;
use super::Invoker;
use super::InvokerConfig;
use super::body_object;
use super::prettify;
use crate::params::ParamValues;
use crate::params::example_values;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Synthetic descriptor carrying an integer-kind body parameter.
fn counted_descriptor() -> EndpointDescriptor {
    EndpointDescriptor {
        name: "counted".to_string(),
        title: "Counted".to_string(),
        method: HttpMethod::Post,
        path_template: "/api/counted".to_string(),
        description: "Synthetic endpoint for body-shaping tests.".to_string(),
        params: vec![
            ParamSpec::new("label", ParamLocation::Body, ParamKind::String, true, "A label."),
            ParamSpec::new("count", ParamLocation::Body, ParamKind::Integer, false, "A count."),
        ],
        example_response: json!({}),
    }
}

// ============================================================================
// SECTION: Configuration
// ============================================================================

#[test]
fn new_rejects_non_http_base_url() {
    let config = InvokerConfig {
        base_url: "ftp://example.com".to_string(),
        ..InvokerConfig::default()
    };
    let error = Invoker::new(config).expect_err("must fail");
    assert!(matches!(error, HarnessError::Config(_)));
}

#[test]
fn new_trims_trailing_slash_from_base_url() {
    let config = InvokerConfig {
        base_url: "http://127.0.0.1:5000/".to_string(),
        ..InvokerConfig::default()
    };
    let invoker = Invoker::new(config).expect("must build");
    assert_eq!(invoker.base_url, "http://127.0.0.1:5000");
}

// ============================================================================
// SECTION: Body Shaping
// ============================================================================

#[test]
fn body_object_carries_declared_string_fields() {
    let descriptor = find_descriptor("create-data").expect("descriptor");
    let params = example_values(&descriptor);
    let body = body_object(&descriptor, &params);
    assert_eq!(
        body,
        json!({"name": "John Doe", "email": "john@example.com", "message": "Hello"})
    );
}

#[test]
fn body_object_omits_unset_fields() {
    let descriptor = find_descriptor("create-data").expect("descriptor");
    let mut params = ParamValues::new();
    params.set("name", "Ada");
    let body = body_object(&descriptor, &params);
    assert_eq!(body, json!({"name": "Ada"}));
}

#[test]
fn body_object_excludes_path_and_query_params() {
    let descriptor = find_descriptor("update-user").expect("descriptor");
    let params = example_values(&descriptor);
    let body = body_object(&descriptor, &params);
    let fields = body.as_object().expect("object body");
    assert!(!fields.contains_key("id"));
    assert!(fields.contains_key("name"));
    assert!(fields.contains_key("email"));
    assert!(fields.contains_key("status"));
}

#[test]
fn body_object_sends_parseable_integers_as_numbers() {
    let descriptor = counted_descriptor();
    let mut params = ParamValues::new();
    params.set("label", "x");
    params.set("count", "7");
    let body = body_object(&descriptor, &params);
    assert_eq!(body, json!({"label": "x", "count": 7}));
}

#[test]
fn body_object_keeps_unparseable_integers_as_strings() {
    let descriptor = counted_descriptor();
    let mut params = ParamValues::new();
    params.set("count", "lots");
    let body = body_object(&descriptor, &params);
    assert_eq!(body, json!({"count": "lots"}));
}

// ============================================================================
// SECTION: Pretty Printing
// ============================================================================

#[test]
fn prettify_reindents_json_bodies() {
    let pretty = prettify("{\"a\":1}");
    let round_trip: Value = serde_json::from_str(&pretty).expect("still json");
    assert_eq!(round_trip, json!({"a": 1}));
    assert!(pretty.contains('\n'));
}

#[test]
fn prettify_passes_non_json_through_unchanged() {
    assert_eq!(prettify("plain text"), "plain text");
}

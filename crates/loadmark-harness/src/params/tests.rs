// crates/loadmark-harness/src/params/tests.rs
// ============================================================================
// Module: Parameter Value Tests
// Description: Validates assignment parsing and example seeding.
// Purpose: Pin the name=value grammar and per-descriptor sample inputs.
// Dependencies: loadmark-contract
// ============================================================================

//! ## Overview
//! Covers the assignment grammar, ordering guarantees, and the seeded
//! example values for every registry descriptor.

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

use loadmark_contract::endpoint_descriptors;
use loadmark_contract::find_descriptor;

use super::ParamError;
use super::ParamValues;
use super::example_values;

// ============================================================================
// SECTION: Assignment Parsing
// ============================================================================

#[test]
fn from_assignments_splits_on_first_equals() {
    let values = ParamValues::from_assignments(&[
        "query=a=b".to_string(),
        "limit=5".to_string(),
    ])
    .expect("valid assignments");
    assert_eq!(values.get("query"), Some("a=b"));
    assert_eq!(values.get("limit"), Some("5"));
}

#[test]
fn from_assignments_rejects_missing_separator() {
    let error = ParamValues::from_assignments(&["query".to_string()]).expect_err("must fail");
    assert_eq!(error, ParamError::InvalidAssignment("query".to_string()));
}

#[test]
fn from_assignments_rejects_empty_name() {
    let error = ParamValues::from_assignments(&["=value".to_string()]).expect_err("must fail");
    assert_eq!(error, ParamError::InvalidAssignment("=value".to_string()));
}

#[test]
fn later_assignments_replace_earlier_ones() {
    let values = ParamValues::from_assignments(&[
        "delay=100".to_string(),
        "delay=200".to_string(),
    ])
    .expect("valid assignments");
    assert_eq!(values.get("delay"), Some("200"));
}

#[test]
fn iteration_follows_name_order() {
    let mut values = ParamValues::new();
    values.set("zeta", "1");
    values.set("alpha", "2");
    let names: Vec<&str> = values.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["alpha", "zeta"]);
}

#[test]
fn unset_removes_a_value() {
    let mut values = ParamValues::new();
    values.set("delay", "100");
    values.unset("delay");
    assert_eq!(values.get("delay"), None);
    assert!(values.is_empty());
}

// ============================================================================
// SECTION: Example Seeding
// ============================================================================

#[test]
fn every_descriptor_seeds_all_declared_params() {
    for descriptor in endpoint_descriptors() {
        let values = example_values(&descriptor);
        for param in &descriptor.params {
            assert!(
                values.get(&param.name).is_some(),
                "descriptor {} missing seed for {}",
                descriptor.name,
                param.name
            );
        }
    }
}

#[test]
fn seeded_values_match_documented_samples() {
    let descriptor = find_descriptor("update-user").expect("descriptor");
    let values = example_values(&descriptor);
    assert_eq!(values.get("id"), Some("1"));
    assert_eq!(values.get("name"), Some("John Doe"));
    assert_eq!(values.get("email"), Some("john@example.com"));
    assert_eq!(values.get("status"), Some("active"));

    let descriptor = find_descriptor("search").expect("descriptor");
    let values = example_values(&descriptor);
    assert_eq!(values.get("query"), Some("test"));
    assert_eq!(values.get("limit"), Some("5"));
    assert_eq!(values.get("page"), Some("1"));
}

#[test]
fn path_identifiers_seed_the_documented_sample_user() {
    let descriptor = find_descriptor("delete-user").expect("descriptor");
    let values = example_values(&descriptor);
    assert_eq!(values.get("id"), Some("1"));

    let descriptor = find_descriptor("update-user").expect("descriptor");
    let values = example_values(&descriptor);
    assert_eq!(values.get("id"), Some("1"));
}

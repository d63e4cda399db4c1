// crates/loadmark-harness/src/params.rs
// ============================================================================
// Module: Parameter Values
// Description: Editable name/value pairs supplied to a descriptor invocation.
// Purpose: Let callers adjust request inputs without touching the schema.
// Dependencies: loadmark-contract
// ============================================================================

//! ## Overview
//! [`ParamValues`] is the mutable side of an invocation: an ordered map of
//! parameter name to string value, edited freely between calls while the
//! descriptor's [`ParamSpec`] list stays fixed. [`example_values`] seeds a
//! map with the documented sample inputs for a descriptor.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use loadmark_contract::EndpointDescriptor;
use loadmark_contract::ParamKind;
use loadmark_contract::ParamSpec;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while parsing caller-supplied parameter assignments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamError {
    /// An assignment was not of the form `name=value`.
    #[error("invalid parameter assignment `{0}`; expected name=value")]
    InvalidAssignment(String),
}

// ============================================================================
// SECTION: Parameter Map
// ============================================================================

/// Ordered parameter name/value pairs for one invocation.
///
/// # Invariants
/// - Iteration order is the lexicographic order of parameter names, so the
///   assembled query string is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamValues {
    /// Name to raw string value.
    values: BTreeMap<String, String>,
}

impl ParamValues {
    /// Creates an empty parameter map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `name=value` assignments into a parameter map.
    ///
    /// The value may itself contain `=`; only the first one splits. Later
    /// assignments for the same name replace earlier ones.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::InvalidAssignment`] when an entry has no `=` or
    /// an empty name.
    pub fn from_assignments(assignments: &[String]) -> Result<Self, ParamError> {
        let mut values = Self::new();
        for assignment in assignments {
            let (name, value) = assignment
                .split_once('=')
                .ok_or_else(|| ParamError::InvalidAssignment(assignment.clone()))?;
            if name.is_empty() {
                return Err(ParamError::InvalidAssignment(assignment.clone()));
            }
            values.set(name, value);
        }
        Ok(values)
    }

    /// Sets one parameter value, replacing any previous value.
    pub fn set(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_string(), value.to_string());
    }

    /// Removes one parameter value.
    pub fn unset(&mut self, name: &str) {
        self.values.remove(name);
    }

    /// Returns the value for a parameter, when set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Iterates over the pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Returns the underlying map for path-template rendering.
    #[must_use]
    pub const fn as_map(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    /// Returns whether no values are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ============================================================================
// SECTION: Example Seeding
// ============================================================================

/// Seeds a parameter map with the documented sample inputs for a descriptor.
///
/// Every declared parameter receives a value, so a seeded map always renders
/// the descriptor's path template and satisfies its required fields.
#[must_use]
pub fn example_values(descriptor: &EndpointDescriptor) -> ParamValues {
    let mut values = ParamValues::new();
    for param in &descriptor.params {
        values.set(&param.name, seed_value(&descriptor.name, param));
    }
    values
}

/// Returns the documented sample value for one parameter.
fn seed_value(endpoint: &str, param: &ParamSpec) -> &'static str {
    match (endpoint, param.name.as_str()) {
        ("update-user" | "delete-user", "id") => "1",
        ("delayed", "delay") => "3000",
        ("create-data" | "update-user", "name") => "John Doe",
        ("create-data" | "update-user", "email") => "john@example.com",
        ("create-data", "message") => "Hello",
        ("update-user", "status") => "active",
        ("search", "query") => "test",
        ("search", "limit") => "5",
        (_, _) => match param.kind {
            ParamKind::Integer => "1",
            ParamKind::String => "test",
        },
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;

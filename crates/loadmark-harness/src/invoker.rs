// crates/loadmark-harness/src/invoker.rs
// ============================================================================
// Module: Descriptor Invoker
// Description: Generic HTTP dispatcher driven entirely by endpoint metadata.
// Purpose: Assemble and send one request per descriptor invocation.
// Dependencies: reqwest, serde_json, tokio, loadmark-contract
// ============================================================================

//! ## Overview
//! One dispatcher serves every endpoint: the descriptor's method selects the
//! HTTP verb, its path template renders the URL, and its parameter schema
//! routes each supplied value into the query string, a path segment, or the
//! JSON body. Responses come back as pretty-printed JSON text; transport
//! failures become `"invocation error: ..."` diagnostics when recorded, so
//! one bad call never disables the harness.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use std::time::Instant;

use loadmark_contract::ContractError;
use loadmark_contract::EndpointDescriptor;
use loadmark_contract::HttpMethod;
use loadmark_contract::ParamKind;
use loadmark_contract::ParamLocation;
use loadmark_contract::endpoint_descriptors;
use loadmark_contract::render_path;
use reqwest::Client;
use reqwest::RequestBuilder;
use reqwest::Response;
use reqwest::redirect::Policy;
use serde_json::Map;
use serde_json::Value;
use thiserror::Error;
use tokio::task::JoinSet;

use crate::params::ParamError;
use crate::params::ParamValues;
use crate::params::example_values;
use crate::state::HarnessState;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default service base URL when none is supplied.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum response body size accepted by the harness.
pub const MAX_RESPONSE_BYTES: usize = 1024 * 1024;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Harness invocation errors.
///
/// # Invariants
/// - Variants are stable for CLI error mapping and tests.
/// - String payloads are user-facing and may include untrusted server text.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Configuration error.
    #[error("harness config error: {0}")]
    Config(String),
    /// Transport error.
    #[error("harness transport error: {0}")]
    Transport(String),
    /// Path-template rendering error.
    #[error("harness contract error: {0}")]
    Contract(#[from] ContractError),
    /// Parameter assignment error.
    #[error("harness parameter error: {0}")]
    Param(#[from] ParamError),
    /// Response size exceeds limits.
    #[error("response exceeds size limit ({actual} > {limit})")]
    ResponseTooLarge {
        /// Actual size in bytes.
        actual: usize,
        /// Maximum size in bytes.
        limit: usize,
    },
}

// ============================================================================
// SECTION: Types
// ============================================================================

/// Invoker configuration.
#[derive(Debug, Clone)]
pub struct InvokerConfig {
    /// Service base URL, scheme and authority only.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for InvokerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Result of one successful HTTP exchange.
///
/// An HTTP error status still produces an [`Invocation`]; the captured body
/// is the structured error payload the route returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// HTTP status code of the response.
    pub status: u16,
    /// Response body, pretty-printed when it parses as JSON.
    pub body: String,
    /// Wall-clock request duration in milliseconds.
    pub elapsed_ms: u128,
}

/// Registry-driven HTTP client.
///
/// # Invariants
/// - `base_url` carries no trailing slash; rendered paths start with one.
#[derive(Debug, Clone)]
pub struct Invoker {
    /// Reqwest client instance.
    client: Client,
    /// Normalized service base URL.
    base_url: String,
}

impl Invoker {
    /// Builds an invoker for the configured service.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Config`] when the base URL is not HTTP, or
    /// [`HarnessError::Transport`] when the HTTP client cannot be built.
    pub fn new(config: InvokerConfig) -> Result<Self, HarnessError> {
        if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
            return Err(HarnessError::Config(format!(
                "base url must start with http:// or https://: `{}`",
                config.base_url
            )));
        }
        let client = Client::builder()
            .timeout(config.timeout)
            .redirect(Policy::none())
            .build()
            .map_err(|err| HarnessError::Transport(err.to_string()))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Sends one request assembled from a descriptor and parameter values.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError`] when path rendering fails or the request
    /// cannot be delivered. An HTTP error status is not an error here.
    pub async fn invoke(
        &self,
        descriptor: &EndpointDescriptor,
        params: &ParamValues,
    ) -> Result<Invocation, HarnessError> {
        let path = render_path(&descriptor.path_template, params.as_map())?;
        let url = format!("{}{path}", self.base_url);
        let request = self.assemble(descriptor, params, &url);
        let start = Instant::now();
        let response = request
            .send()
            .await
            .map_err(|err| HarnessError::Transport(err.to_string()))?;
        let status = response.status().as_u16();
        let body = read_body_with_limit(response, MAX_RESPONSE_BYTES).await?;
        let text = String::from_utf8_lossy(&body);
        Ok(Invocation {
            status,
            body: prettify(&text),
            elapsed_ms: start.elapsed().as_millis(),
        })
    }

    /// Invokes a descriptor and records the outcome in the harness state.
    ///
    /// Failures are captured as `"invocation error: ..."` text instead of
    /// propagating, so the harness stays usable after a failed call.
    pub async fn invoke_recorded(
        &self,
        state: &HarnessState,
        descriptor: &EndpointDescriptor,
        params: &ParamValues,
    ) -> String {
        let sequence = state.begin(&descriptor.name);
        let start = Instant::now();
        let outcome = match self.invoke(descriptor, params).await {
            Ok(invocation) => invocation.body,
            Err(err) => format!("invocation error: {err}"),
        };
        state.complete(&descriptor.name, sequence, outcome.clone(), start.elapsed().as_millis());
        outcome
    }

    /// Invokes every registry descriptor concurrently with example values.
    ///
    /// Returns the captured outcome text per descriptor name. Each call is
    /// recorded in `state` as it completes; a failing endpoint yields its
    /// diagnostic text without aborting the others.
    pub async fn exercise(&self, state: &Arc<HarnessState>) -> BTreeMap<String, String> {
        let mut calls = JoinSet::new();
        for descriptor in endpoint_descriptors() {
            let invoker = self.clone();
            let state = Arc::clone(state);
            calls.spawn(async move {
                let params = example_values(&descriptor);
                let outcome = invoker.invoke_recorded(&state, &descriptor, &params).await;
                (descriptor.name, outcome)
            });
        }
        let mut outcomes = BTreeMap::new();
        while let Some(joined) = calls.join_next().await {
            if let Ok((name, outcome)) = joined {
                outcomes.insert(name, outcome);
            }
        }
        outcomes
    }

    /// Builds the request from the descriptor's method and parameter schema.
    fn assemble(
        &self,
        descriptor: &EndpointDescriptor,
        params: &ParamValues,
        url: &str,
    ) -> RequestBuilder {
        let mut request = match descriptor.method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
            HttpMethod::Put => self.client.put(url),
            HttpMethod::Delete => self.client.delete(url),
        };
        let query: Vec<(&str, &str)> = descriptor
            .params_at(ParamLocation::Query)
            .filter_map(|spec| params.get(&spec.name).map(|value| (spec.name.as_str(), value)))
            .collect();
        if !query.is_empty() {
            request = request.query(&query);
        }
        if descriptor.params_at(ParamLocation::Body).next().is_some() {
            request = request.json(&body_object(descriptor, params));
        }
        request
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds the JSON body object from the descriptor's body parameters.
///
/// Integer-kind values that parse as numbers are sent as JSON numbers;
/// everything else is sent as a string. Unset parameters are omitted.
fn body_object(descriptor: &EndpointDescriptor, params: &ParamValues) -> Value {
    let mut fields = Map::new();
    for spec in descriptor.params_at(ParamLocation::Body) {
        let Some(raw) = params.get(&spec.name) else {
            continue;
        };
        let value = match spec.kind {
            ParamKind::Integer => raw
                .parse::<u64>()
                .map_or_else(|_| Value::String(raw.to_string()), Value::from),
            ParamKind::String => Value::String(raw.to_string()),
        };
        fields.insert(spec.name.clone(), value);
    }
    Value::Object(fields)
}

/// Reads a response body while enforcing a size limit.
///
/// # Errors
///
/// Returns [`HarnessError::ResponseTooLarge`] when the body exceeds `limit`
/// or [`HarnessError::Transport`] when the read fails.
async fn read_body_with_limit(
    mut response: Response,
    limit: usize,
) -> Result<Vec<u8>, HarnessError> {
    let mut body = Vec::new();
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|err| HarnessError::Transport(err.to_string()))?
    {
        if body.len() + chunk.len() > limit {
            return Err(HarnessError::ResponseTooLarge {
                actual: body.len() + chunk.len(),
                limit,
            });
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

/// Pretty-prints a response body when it parses as JSON.
fn prettify(text: &str) -> String {
    serde_json::from_str::<Value>(text)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| text.to_string())
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;

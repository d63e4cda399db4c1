// crates/loadmark-server/src/telemetry.rs
// ============================================================================
// Module: Request Telemetry
// Description: Request log events and sinks for the mock service.
// Purpose: Emit per-request logs without hard logging dependencies.
// Dependencies: axum, serde
// ============================================================================

//! ## Overview
//! This module defines a thin request-logging interface so deployments can
//! route events to their preferred pipeline without redesign. The default
//! sink writes JSON lines to stderr; a noop sink keeps tests quiet.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::Response;
use serde::Serialize;

use crate::state::AppState;

// ============================================================================
// SECTION: Types
// ============================================================================

/// One handled request, as seen by the logging middleware.
#[derive(Debug, Clone, Serialize)]
pub struct RequestEvent {
    /// HTTP method label.
    pub method: String,
    /// Request path (without query string).
    pub path: String,
    /// Response status code.
    pub status: u16,
    /// Handling latency in milliseconds.
    pub elapsed_ms: u128,
}

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Request log sink.
pub trait RequestLogSink: Send + Sync {
    /// Records one handled request.
    fn record(&self, event: &RequestEvent);
}

/// Sink that writes JSON lines to stderr.
pub struct StderrRequestLog;

impl RequestLogSink for StderrRequestLog {
    fn record(&self, event: &RequestEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Sink that discards events.
pub struct NoopRequestLog;

impl RequestLogSink for NoopRequestLog {
    fn record(&self, _event: &RequestEvent) {}
}

// ============================================================================
// SECTION: Middleware
// ============================================================================

/// Axum middleware recording method, path, status, and latency per request.
pub async fn track_request(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let start = Instant::now();
    let response = next.run(request).await;
    state.log().record(&RequestEvent {
        method,
        path,
        status: response.status().as_u16(),
        elapsed_ms: start.elapsed().as_millis(),
    });
    response
}

// ============================================================================
// SECTION: Tests
// ============================================================================

// crates/loadmark-server/src/routes.rs
// ============================================================================
// Module: Mock Routes
// Description: Handlers for the seven simulated backend response patterns.
// Purpose: Answer each route deterministically from its own input.
// Dependencies: axum, tokio, loadmark-contract
// ============================================================================

//! ## Overview
//! Each handler is side-effect-free with respect to shared state; timestamps
//! and scores come from the injected sources in [`AppState`]. Validation is
//! deliberately asymmetric: `/api/data`, `/api/search`, and the PUT body fail
//! loudly with 400, while malformed optional knobs (`delay`, `limit`, `page`)
//! silently fall back to documented defaults so load-testing tools never trip
//! over a malformed tuning value.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::time::Duration;

use axum::Json;
use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use loadmark_contract::payloads::DataBody;
use loadmark_contract::payloads::DataReceived;
use loadmark_contract::payloads::DataResponse;
use loadmark_contract::payloads::DeleteResponse;
use loadmark_contract::payloads::HealthResponse;
use loadmark_contract::payloads::MessageResponse;
use loadmark_contract::payloads::MissingFieldsError;
use loadmark_contract::payloads::SearchResponse;
use loadmark_contract::payloads::SearchResult;
use loadmark_contract::payloads::SearchUsageError;
use loadmark_contract::payloads::UpdateError;
use loadmark_contract::payloads::UpdateResponse;
use loadmark_contract::payloads::UserBody;
use loadmark_contract::payloads::UserUpdated;
use serde::Deserialize;
use thiserror::Error;
use tokio::time::sleep;

use crate::state::AppState;
use crate::state::memory_usage;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default per-page limit for `/api/search`.
const DEFAULT_SEARCH_LIMIT: u32 = 10;
/// Default page number for `/api/search`.
const DEFAULT_SEARCH_PAGE: u32 = 1;
/// Maximum number of generated search results.
const MAX_SEARCH_RESULTS: u32 = 5;
/// Simulated total match count reported by `/api/search`.
const SEARCH_TOTAL: u32 = 25;
/// Message substituted when `POST /api/data` carries none.
const NO_MESSAGE: &str = "No message provided";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Client input errors surfaced as HTTP 400 with structured payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    /// `POST /api/data` without `name` or `email`.
    #[error("missing required fields")]
    MissingDataFields,
    /// `GET /api/search` without a query.
    #[error("query parameter is required")]
    MissingQuery,
    /// `PUT /api/user/{id}` without `name` or `email`.
    #[error("name and email are required for update")]
    MissingUpdateFields,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingDataFields => (
                StatusCode::BAD_REQUEST,
                Json(MissingFieldsError {
                    error: "Missing required fields".to_string(),
                    required: vec!["name".to_string(), "email".to_string()],
                }),
            )
                .into_response(),
            Self::MissingQuery => (
                StatusCode::BAD_REQUEST,
                Json(SearchUsageError {
                    error: "Query parameter is required".to_string(),
                    example: "/api/search?query=test&limit=5&page=1".to_string(),
                }),
            )
                .into_response(),
            Self::MissingUpdateFields => (
                StatusCode::BAD_REQUEST,
                Json(UpdateError {
                    error: "Name and email are required for update".to_string(),
                }),
            )
                .into_response(),
        }
    }
}

// ============================================================================
// SECTION: Query Shapes
// ============================================================================

/// Raw query parameters for `/api/delayed`.
///
/// The delay arrives as a string so malformed values reach the permissive
/// fallback instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct DelayedQuery {
    /// Requested delay in milliseconds, unparsed.
    delay: Option<String>,
}

/// Raw query parameters for `/api/search`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Search text; required.
    query: Option<String>,
    /// Requested result count, unparsed.
    limit: Option<String>,
    /// Requested page number, unparsed.
    page: Option<String>,
}

// ============================================================================
// SECTION: Handlers
// ============================================================================

/// `GET /api/message` — fixed greeting, immediately.
pub async fn message() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from backend!".to_string(),
    })
}

/// `GET /api/delayed` — suspends this request only, then confirms the delay.
pub async fn delayed(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DelayedQuery>,
) -> Json<MessageResponse> {
    let delay_ms = effective_delay_ms(params.delay.as_deref(), state.default_delay_ms());
    sleep(Duration::from_millis(delay_ms)).await;
    Json(MessageResponse {
        message: format!("This response was delayed by {} seconds.", seconds_text(delay_ms)),
    })
}

/// `POST /api/data` — validates the body and echoes the received fields.
///
/// # Errors
///
/// Returns [`ApiError::MissingDataFields`] when `name` or `email` is absent
/// or empty.
pub async fn create_data(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DataBody>,
) -> Result<Json<DataResponse>, ApiError> {
    let name = present(body.name.as_deref()).ok_or(ApiError::MissingDataFields)?;
    let email = present(body.email.as_deref()).ok_or(ApiError::MissingDataFields)?;
    let message = present(body.message.as_deref()).unwrap_or(NO_MESSAGE);
    Ok(Json(DataResponse {
        success: true,
        received: DataReceived {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        },
        timestamp: state.timestamp(),
    }))
}

/// `GET /api/search` — generates synthetic results for the query.
///
/// # Errors
///
/// Returns [`ApiError::MissingQuery`] when no query text is supplied.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = present(params.query.as_deref()).ok_or(ApiError::MissingQuery)?;
    let limit = parse_or(params.limit.as_deref(), DEFAULT_SEARCH_LIMIT);
    let page = parse_or(params.page.as_deref(), DEFAULT_SEARCH_PAGE);
    let generated = limit.min(MAX_SEARCH_RESULTS);
    let results = (1..=generated)
        .map(|id| SearchResult {
            id,
            title: format!("Result {id} for \"{query}\""),
            description: format!("This is a sample search result for query: {query}"),
            score: state.next_score(),
        })
        .collect();
    Ok(Json(SearchResponse {
        query: query.to_string(),
        page,
        limit,
        total: SEARCH_TOTAL,
        results,
    }))
}

/// `PUT /api/user/{id}` — confirms an update, echoing the new fields.
///
/// # Errors
///
/// Returns [`ApiError::MissingUpdateFields`] when `name` or `email` is absent
/// or empty.
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<UserBody>,
) -> Result<Json<UpdateResponse>, ApiError> {
    let name = present(body.name.as_deref()).ok_or(ApiError::MissingUpdateFields)?;
    let email = present(body.email.as_deref()).ok_or(ApiError::MissingUpdateFields)?;
    let status = present(body.status.as_deref()).unwrap_or("active");
    Ok(Json(UpdateResponse {
        success: true,
        message: format!("User {id} updated successfully"),
        updated: UserUpdated {
            id,
            name: name.to_string(),
            email: email.to_string(),
            status: status.to_string(),
        },
        timestamp: state.timestamp(),
    }))
}

/// `DELETE /api/user/{id}` — confirms a delete with no existence check.
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<DeleteResponse> {
    Json(DeleteResponse {
        success: true,
        message: format!("User {id} deleted successfully"),
        deleted_id: id,
        timestamp: state.timestamp(),
    })
}

/// `GET /api/health` — status, uptime, and host-process memory counters.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: state.timestamp(),
        uptime: state.uptime_seconds(),
        memory: memory_usage(),
    })
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns the field text when present and non-empty.
fn present(raw: Option<&str>) -> Option<&str> {
    raw.filter(|text| !text.is_empty())
}

/// Resolves the effective delay, silently replacing invalid values.
///
/// Non-numeric and negative inputs fall back to `default_ms` rather than
/// producing a 4xx; load-testing tools must never trip over a malformed
/// delay value.
fn effective_delay_ms(raw: Option<&str>, default_ms: u64) -> u64 {
    raw.and_then(|text| text.trim().parse::<u64>().ok()).unwrap_or(default_ms)
}

/// Parses an optional numeric knob, falling back to its documented default.
fn parse_or(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|text| text.trim().parse::<u32>().ok()).unwrap_or(default)
}

/// Formats a millisecond delay as seconds the way the wire message states it.
#[allow(clippy::cast_precision_loss, reason = "Delays stay far below f64 precision limits.")]
fn seconds_text(delay_ms: u64) -> String {
    format!("{}", delay_ms as f64 / 1000.0)
}

// ============================================================================
// SECTION: Tests
// ============================================================================

// crates/loadmark-contract/src/payloads.rs
// ============================================================================
// Module: Wire Payloads
// Description: Request and response payload shapes for every mock route.
// Purpose: Share one set of typed wire shapes between server and harness.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Typed request/response payloads for the mock endpoint surface. The server
//! serializes these shapes and the harness (and tests) deserialize captured
//! responses back into them, so the documented examples stay honest.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Message & Delay
// ============================================================================

/// Response for `/api/message` and `/api/delayed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Greeting or delay-confirmation text.
    pub message: String,
}

// ============================================================================
// SECTION: Create Data
// ============================================================================

/// JSON body accepted by `POST /api/data`.
///
/// # Invariants
/// - `name` and `email` are required by the handler; empty strings count as
///   absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataBody {
    /// Submitter name (required).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Submitter email (required).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Optional free-form message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Validated fields echoed back by `POST /api/data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataReceived {
    /// Validated name.
    pub name: String,
    /// Validated email.
    pub email: String,
    /// Message, defaulting to `"No message provided"`.
    pub message: String,
}

/// Success response for `POST /api/data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// Echo of the validated request fields.
    pub received: DataReceived,
    /// RFC 3339 handling timestamp.
    pub timestamp: String,
}

/// Error payload for `POST /api/data` with missing required fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingFieldsError {
    /// Human-readable error summary.
    pub error: String,
    /// Names of the required fields.
    pub required: Vec<String>,
}

// ============================================================================
// SECTION: Search
// ============================================================================

/// One synthetic search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// One-based result identifier.
    pub id: u32,
    /// Title referencing the query text.
    pub title: String,
    /// Description referencing the query text.
    pub description: String,
    /// Random relevance score in `[0, 100)`.
    pub score: f64,
}

/// Success response for `GET /api/search`.
///
/// # Invariants
/// - `total` is fixed at 25 regardless of the generated result count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Echo of the query text.
    pub query: String,
    /// Effective page number.
    pub page: u32,
    /// Effective per-page limit.
    pub limit: u32,
    /// Simulated total match count.
    pub total: u32,
    /// Generated results, at most five.
    pub results: Vec<SearchResult>,
}

/// Error payload for `GET /api/search` without a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchUsageError {
    /// Human-readable error summary.
    pub error: String,
    /// Example usage string.
    pub example: String,
}

// ============================================================================
// SECTION: User Mutation
// ============================================================================

/// JSON body accepted by `PUT /api/user/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserBody {
    /// Updated name (required).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Updated email (required).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Updated status; defaults to `"active"` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Updated fields echoed by `PUT /api/user/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdated {
    /// Path identifier as received.
    pub id: String,
    /// Updated name.
    pub name: String,
    /// Updated email.
    pub email: String,
    /// Effective status.
    pub status: String,
}

/// Success response for `PUT /api/user/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// Confirmation text referencing the identifier.
    pub message: String,
    /// Echo of the updated fields.
    pub updated: UserUpdated,
    /// RFC 3339 handling timestamp.
    pub timestamp: String,
}

/// Error payload for `PUT /api/user/{id}` with missing fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateError {
    /// Human-readable error summary.
    pub error: String,
}

/// Success response for `DELETE /api/user/{id}`.
///
/// # Invariants
/// - Idempotent by construction; no existence check precedes the echo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Always `true`.
    pub success: bool,
    /// Confirmation text referencing the identifier.
    pub message: String,
    /// Path identifier as received.
    #[serde(rename = "deletedId")]
    pub deleted_id: String,
    /// RFC 3339 handling timestamp.
    pub timestamp: String,
}

// ============================================================================
// SECTION: Health
// ============================================================================

/// Process memory counters reported by `/api/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryUsage {
    /// Resident set size in bytes.
    pub rss_bytes: u64,
    /// Virtual memory size in bytes.
    pub virtual_bytes: u64,
}

/// Response for `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"healthy"`.
    pub status: String,
    /// RFC 3339 handling timestamp.
    pub timestamp: String,
    /// Seconds since service start.
    pub uptime: f64,
    /// Host-process memory counters.
    pub memory: MemoryUsage,
}

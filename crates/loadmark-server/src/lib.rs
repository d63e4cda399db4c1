// crates/loadmark-server/src/lib.rs
// ============================================================================
// Module: Loadmark Server
// Description: Mock endpoint service exhibiting common backend patterns.
// Purpose: Serve fixed routes for load-testing tool rehearsal.
// Dependencies: axum, tokio, loadmark-contract
// ============================================================================

//! ## Overview
//! Loadmark Server exposes a small, stateless HTTP surface: instant replies,
//! artificial latency, validated POST bodies, parameterized search and
//! mutation, and a health snapshot. Handlers share no mutable state; every
//! response derives from the request's own input and the moment of handling,
//! so each call is independently reproducible under load.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod routes;
pub mod server;
pub mod state;
pub mod telemetry;


// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::ConfigError;
pub use config::ServiceConfig;
pub use server::ServeError;
pub use server::ServerHandle;
pub use server::spawn;
pub use state::AppState;
pub use state::Clock;
pub use state::ScoreSource;
pub use state::SystemClock;
pub use telemetry::NoopRequestLog;
pub use telemetry::RequestEvent;
pub use telemetry::RequestLogSink;
pub use telemetry::StderrRequestLog;

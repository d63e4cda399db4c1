// crates/loadmark-server/src/server.rs
// ============================================================================
// Module: HTTP Server
// Description: Router construction and listener lifecycle for the service.
// Purpose: Bind the mock routes to a TCP listener with graceful shutdown.
// Dependencies: axum, tokio
// ============================================================================

//! ## Overview
//! Builds the axum router over [`AppState`] and serves it. [`serve`] runs the
//! configured listener until the process ends; [`spawn`] binds an ephemeral
//! port and returns a handle, for tests and harness sessions that embed the
//! service.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::config::ConfigError;
use crate::config::ServiceConfig;
use crate::routes;
use crate::state::AppState;
use crate::telemetry;
use crate::telemetry::RequestLogSink;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Server lifecycle errors.
#[derive(Debug, Error)]
pub enum ServeError {
    /// Configuration errors.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    /// Listener bind failures.
    #[error("bind failed: {0}")]
    Bind(String),
    /// Serve-loop failures.
    #[error("server failed: {0}")]
    Serve(String),
}

// ============================================================================
// SECTION: Router
// ============================================================================

/// Builds the mock route table over the given state.
///
/// Route order mirrors the canonical registry in `loadmark-contract`; the
/// registry tests hold the two in sync.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/message", get(routes::message))
        .route("/api/delayed", get(routes::delayed))
        .route("/api/data", post(routes::create_data))
        .route("/api/search", get(routes::search))
        .route("/api/user/{id}", put(routes::update_user).delete(routes::delete_user))
        .route("/api/health", get(routes::health))
        .layer(middleware::from_fn_with_state(Arc::clone(&state), telemetry::track_request))
        .with_state(state)
}

// ============================================================================
// SECTION: Serving
// ============================================================================

/// Serves the configured listener until the task is cancelled.
///
/// # Errors
///
/// Returns [`ServeError`] when the bind address is invalid, binding fails,
/// or the serve loop fails.
pub async fn serve(config: ServiceConfig, log: Arc<dyn RequestLogSink>) -> Result<(), ServeError> {
    let addr = config.bind_addr()?;
    let state = Arc::new(AppState::from_config(&config, log));
    let app = router(state);
    let listener =
        TcpListener::bind(addr).await.map_err(|err| ServeError::Bind(err.to_string()))?;
    axum::serve(listener, app).await.map_err(|err| ServeError::Serve(err.to_string()))
}

/// Handle for an embedded server instance.
pub struct ServerHandle {
    /// Bound listener address.
    local_addr: SocketAddr,
    /// Graceful shutdown trigger.
    shutdown: Option<oneshot::Sender<()>>,
    /// Serve-loop task handle.
    join: Option<JoinHandle<()>>,
}

impl ServerHandle {
    /// Returns the bound listener address.
    #[must_use]
    pub const fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Returns the HTTP base URL for the bound listener.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.local_addr)
    }

    /// Shuts the server down and waits for the serve loop to finish.
    pub async fn shutdown(mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(join) = self.join.take() {
            let _ = join.await;
        }
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

/// Spawns the service on an ephemeral loopback port.
///
/// # Errors
///
/// Returns [`ServeError`] when binding fails.
pub async fn spawn(state: Arc<AppState>) -> Result<ServerHandle, ServeError> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .map_err(|err| ServeError::Bind(err.to_string()))?;
    let local_addr =
        listener.local_addr().map_err(|err| ServeError::Bind(err.to_string()))?;
    let app = router(state);
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let join = tokio::spawn(async move {
        let server = axum::serve(listener, app).with_graceful_shutdown(async move {
            let _ = shutdown_rx.await;
        });
        let _ = server.await;
    });
    Ok(ServerHandle {
        local_addr,
        shutdown: Some(shutdown_tx),
        join: Some(join),
    })
}

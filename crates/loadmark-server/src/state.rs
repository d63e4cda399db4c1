// crates/loadmark-server/src/state.rs
// ============================================================================
// Module: Application State
// Description: Shared handler state with injected clock and score source.
// Purpose: Keep handlers pure given their input plus injected time/randomness.
// Dependencies: rand, sysinfo, time, loadmark-contract
// ============================================================================

//! ## Overview
//! Handlers read no mutable shared state. The only process-wide values are
//! the injected clock, the score source for synthetic search results, and
//! the service start instant consumed by the health route. Injecting the
//! clock and score source lets tests supply deterministic values.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::time::Instant;

use loadmark_contract::payloads::MemoryUsage;
use rand::Rng;
use sysinfo::ProcessRefreshKind;
use sysinfo::ProcessesToUpdate;
use sysinfo::System;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::config::ServiceConfig;
use crate::telemetry::RequestLogSink;

// ============================================================================
// SECTION: Injection Traits
// ============================================================================

/// Wall-clock abstraction for handler timestamps.
pub trait Clock: Send + Sync {
    /// Returns the current moment.
    fn now(&self) -> OffsetDateTime;
}

/// System wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Source of synthetic relevance scores in `[0, 100)`.
pub trait ScoreSource: Send + Sync {
    /// Returns the next score.
    fn next_score(&self) -> f64;
}

/// Thread-local RNG score source.
pub struct RandomScores;

impl ScoreSource for RandomScores {
    fn next_score(&self) -> f64 {
        rand::thread_rng().gen_range(0.0..100.0)
    }
}

// ============================================================================
// SECTION: Application State
// ============================================================================

/// Shared state handed to every handler.
///
/// # Invariants
/// - Nothing here is mutated by request handling; `started` is fixed at
///   construction and the injected sources are internally stateless.
pub struct AppState {
    /// Injected wall clock.
    clock: Arc<dyn Clock>,
    /// Injected score source for search results.
    scores: Arc<dyn ScoreSource>,
    /// Request log sink fed by the telemetry middleware.
    log: Arc<dyn RequestLogSink>,
    /// Service start instant for uptime reporting.
    started: Instant,
    /// Delay applied by `/api/delayed` when the caller supplies none.
    default_delay_ms: u64,
}

impl AppState {
    /// Builds production state from configuration.
    #[must_use]
    pub fn from_config(config: &ServiceConfig, log: Arc<dyn RequestLogSink>) -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(RandomScores), log, config.delay.default_ms)
    }

    /// Builds state with explicit clock and score sources.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        scores: Arc<dyn ScoreSource>,
        log: Arc<dyn RequestLogSink>,
        default_delay_ms: u64,
    ) -> Self {
        Self {
            clock,
            scores,
            log,
            started: Instant::now(),
            default_delay_ms,
        }
    }

    /// Returns the current timestamp as an RFC 3339 string.
    #[must_use]
    pub fn timestamp(&self) -> String {
        self.clock
            .now()
            .format(&Rfc3339)
            .unwrap_or_else(|_| String::from("1970-01-01T00:00:00Z"))
    }

    /// Returns the next synthetic search score.
    #[must_use]
    pub fn next_score(&self) -> f64 {
        self.scores.next_score()
    }

    /// Returns seconds elapsed since service start.
    #[must_use]
    pub fn uptime_seconds(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    /// Returns the default delay for `/api/delayed`.
    #[must_use]
    pub const fn default_delay_ms(&self) -> u64 {
        self.default_delay_ms
    }

    /// Returns the request log sink.
    #[must_use]
    pub fn log(&self) -> &dyn RequestLogSink {
        self.log.as_ref()
    }
}

// ============================================================================
// SECTION: Process Memory
// ============================================================================

/// Reads memory counters for the current process.
///
/// Counters fall back to zero when the host refuses process inspection; the
/// health route stays available either way.
#[must_use]
pub fn memory_usage() -> MemoryUsage {
    sysinfo::get_current_pid()
        .ok()
        .and_then(|pid| {
            let mut system = System::new();
            system.refresh_processes_specifics(
                ProcessesToUpdate::Some(&[pid]),
                true,
                ProcessRefreshKind::new().with_memory(),
            );
            system.process(pid).map(|process| MemoryUsage {
                rss_bytes: process.memory(),
                virtual_bytes: process.virtual_memory(),
            })
        })
        .unwrap_or(MemoryUsage {
            rss_bytes: 0,
            virtual_bytes: 0,
        })
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;

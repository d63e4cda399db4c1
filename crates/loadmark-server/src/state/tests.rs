// crates/loadmark-server/src/state/tests.rs
// ============================================================================
// Module: State Unit Tests
// Description: Validates injected clock/score behavior and process probes.
// Purpose: Keep handler inputs deterministic under test clocks.
// Dependencies: loadmark-server, time
// ============================================================================

//! ## Overview
//! Covers timestamp formatting through an injected clock, score bounds, and
//! the memory probe's no-panic guarantee.

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

use std::sync::Arc;

use time::OffsetDateTime;

use super::AppState;
use super::Clock;
use super::RandomScores;
use super::ScoreSource;
use super::memory_usage;
use crate::telemetry::NoopRequestLog;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }
}

struct FixedScores;

impl ScoreSource for FixedScores {
    fn next_score(&self) -> f64 {
        42.5
    }
}

fn fixture_state(default_delay_ms: u64) -> AppState {
    AppState::new(
        Arc::new(FixedClock),
        Arc::new(FixedScores),
        Arc::new(NoopRequestLog),
        default_delay_ms,
    )
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn timestamp_formats_injected_clock_as_rfc3339() {
    let state = fixture_state(5_000);
    assert_eq!(state.timestamp(), "2023-11-14T22:13:20Z");
}

#[test]
fn injected_score_source_flows_through() {
    let state = fixture_state(5_000);
    assert!((state.next_score() - 42.5).abs() < f64::EPSILON);
}

#[test]
fn uptime_is_non_negative_and_monotonic() {
    let state = fixture_state(5_000);
    let first = state.uptime_seconds();
    let second = state.uptime_seconds();
    assert!(first >= 0.0);
    assert!(second >= first);
}

#[test]
fn default_delay_passes_through() {
    let state = fixture_state(1_234);
    assert_eq!(state.default_delay_ms(), 1_234);
}

#[test]
fn random_scores_stay_in_range() {
    let source = RandomScores;
    for _ in 0..100 {
        let score = source.next_score();
        assert!((0.0..100.0).contains(&score));
    }
}

#[test]
fn memory_probe_reports_serializable_counters() {
    // Zero counters are legal when the host refuses inspection; the shape
    // must hold either way.
    let usage = memory_usage();
    let encoded = serde_json::to_value(usage).expect("serialize");
    assert!(encoded.get("rss_bytes").is_some());
    assert!(encoded.get("virtual_bytes").is_some());
}

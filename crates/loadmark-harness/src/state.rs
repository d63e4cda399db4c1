// crates/loadmark-harness/src/state.rs
// ============================================================================
// Module: Invocation State
// Description: Per-descriptor tracking of in-flight and completed calls.
// Purpose: Keep each descriptor's displayed outcome isolated and current.
// Dependencies: std
// ============================================================================

//! ## Overview
//! [`HarnessState`] holds one [`InvocationState`] per descriptor name. A call
//! registers when it starts and records its outcome when it completes; the
//! retained outcome is always the most recently *completed* call, so a slow
//! earlier request landing late overwrites a faster later one, and nothing
//! else. Descriptors never share outcome state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::PoisonError;

// ============================================================================
// SECTION: Per-Descriptor State
// ============================================================================

/// Outcome of one completed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedInvocation {
    /// Start sequence number of the call that produced this outcome.
    pub sequence: u64,
    /// Captured response body or diagnostic text.
    pub outcome: String,
    /// Wall-clock duration of the call in milliseconds.
    pub elapsed_ms: u128,
}

/// Tracking record for one descriptor.
///
/// # Invariants
/// - `completed <= started`.
/// - `last` reflects the most recently completed call, regardless of start
///   order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationState {
    /// Calls started so far.
    pub started: u64,
    /// Calls completed so far.
    pub completed: u64,
    /// Most recently completed outcome, when any call has finished.
    pub last: Option<CompletedInvocation>,
}

impl InvocationState {
    /// Returns the number of calls currently in flight.
    #[must_use]
    pub const fn in_flight(&self) -> u64 {
        self.started - self.completed
    }

    /// Returns the retained outcome text, when any call has completed.
    #[must_use]
    pub fn last_outcome(&self) -> Option<&str> {
        self.last.as_ref().map(|record| record.outcome.as_str())
    }
}

// ============================================================================
// SECTION: Harness State
// ============================================================================

/// Shared invocation tracking across all descriptors.
///
/// Recording never fails; a poisoned lock is recovered since the tracked
/// counters stay internally consistent under overwrite semantics.
#[derive(Debug, Default)]
pub struct HarnessState {
    /// Descriptor name to tracking record.
    states: Mutex<BTreeMap<String, InvocationState>>,
}

impl HarnessState {
    /// Creates an empty tracking table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a call start and returns its sequence number.
    pub fn begin(&self, descriptor: &str) -> u64 {
        let mut states = self.states.lock().unwrap_or_else(PoisonError::into_inner);
        let state = states.entry(descriptor.to_string()).or_default();
        state.started += 1;
        state.started
    }

    /// Records a completed call's outcome for a descriptor.
    pub fn complete(&self, descriptor: &str, sequence: u64, outcome: String, elapsed_ms: u128) {
        let mut states = self.states.lock().unwrap_or_else(PoisonError::into_inner);
        let state = states.entry(descriptor.to_string()).or_default();
        state.completed += 1;
        state.last = Some(CompletedInvocation {
            sequence,
            outcome,
            elapsed_ms,
        });
    }

    /// Returns a copy of one descriptor's tracking record.
    #[must_use]
    pub fn snapshot(&self, descriptor: &str) -> Option<InvocationState> {
        let states = self.states.lock().unwrap_or_else(PoisonError::into_inner);
        states.get(descriptor).cloned()
    }

    /// Returns a copy of every descriptor's tracking record.
    #[must_use]
    pub fn snapshot_all(&self) -> BTreeMap<String, InvocationState> {
        let states = self.states.lock().unwrap_or_else(PoisonError::into_inner);
        states.clone()
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

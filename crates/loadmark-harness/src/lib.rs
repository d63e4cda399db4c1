// crates/loadmark-harness/src/lib.rs
// ============================================================================
// Module: Loadmark Harness
// Description: Registry-driven HTTP client for exercising the mock endpoints.
// Purpose: Invoke live routes from their descriptors and track outcomes.
// Dependencies: reqwest, serde_json, loadmark-contract
// ============================================================================

//! ## Overview
//! The harness turns [`loadmark_contract`] descriptors into live HTTP calls.
//! One generic dispatcher assembles each request from the descriptor's
//! method, path template, and parameter schema; there is no per-endpoint
//! request code. Outcomes are recorded per descriptor, and a failed call
//! leaves the harness fully usable.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod invoker;
pub mod params;
pub mod state;

#[cfg(test)]
mod tests {
    //! Test-only lint relaxations for panic-based assertions and debug output.
    #![allow(
        clippy::panic,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::use_debug,
        clippy::dbg_macro,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        reason = "Test-only output and panic-based assertions are permitted."
    )]
}

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use invoker::DEFAULT_BASE_URL;
pub use invoker::DEFAULT_TIMEOUT;
pub use invoker::MAX_RESPONSE_BYTES;
pub use invoker::HarnessError;
pub use invoker::Invocation;
pub use invoker::Invoker;
pub use invoker::InvokerConfig;
pub use params::ParamError;
pub use params::ParamValues;
pub use params::example_values;
pub use state::CompletedInvocation;
pub use state::HarnessState;
pub use state::InvocationState;

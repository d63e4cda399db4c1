// crates/loadmark-contract/src/lib.rs
// ============================================================================
// Module: Loadmark Contract
// Description: Shared endpoint contract for the mock service and harness.
// Purpose: Describe each endpoint once and reuse it for docs and invocation.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Loadmark Contract holds the single source of truth for the mock endpoint
//! surface: descriptor types, the canonical ordered registry, and the wire
//! payload shapes that the server emits and the harness consumes. Every
//! descriptor documents exactly the parameters its live handler reads, so the
//! same record renders documentation and drives live invocations.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod payloads;
pub mod registry;
pub mod types;

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

pub use registry::endpoint_descriptors;
pub use registry::find_descriptor;
pub use types::ContractError;
pub use types::EndpointDescriptor;
pub use types::HttpMethod;
pub use types::ParamKind;
pub use types::ParamLocation;
pub use types::ParamSpec;
pub use types::render_path;

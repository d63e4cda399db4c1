// crates/loadmark-server/src/config/tests.rs
// ============================================================================
// Module: Configuration Unit Tests
// Description: Validates config loading, limits, and fail-closed parsing.
// Purpose: Keep the config surface strict and defaulted.
// Dependencies: loadmark-server, tempfile, toml
// ============================================================================

//! ## Overview
//! Covers default resolution, TOML parsing, size caps, and validation.

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

use std::fs;
use std::path::Path;

use super::ConfigError;
use super::DEFAULT_DELAY_MS;
use super::ServiceConfig;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

fn write_config(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("loadmark.toml");
    fs::write(&path, contents).expect("write config");
    path
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn default_config_binds_loopback_port_5000() {
    let config = ServiceConfig::default();
    assert_eq!(config.server.bind, "127.0.0.1:5000");
    assert_eq!(config.delay.default_ms, DEFAULT_DELAY_MS);
    assert!(config.validate().is_ok());
}

#[test]
fn load_reads_explicit_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(
        dir.path(),
        "[server]\nbind = \"127.0.0.1:0\"\n\n[delay]\ndefault_ms = 250\n",
    );
    let config = ServiceConfig::load(Some(&path)).expect("load");
    assert_eq!(config.server.bind, "127.0.0.1:0");
    assert_eq!(config.delay.default_ms, 250);
}

#[test]
fn load_rejects_missing_explicit_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("absent.toml");
    let error = ServiceConfig::load(Some(&missing)).expect_err("must fail");
    assert!(matches!(error, ConfigError::Read(_)));
}

#[test]
fn load_rejects_invalid_toml() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(dir.path(), "server = not valid toml");
    let error = ServiceConfig::load(Some(&path)).expect_err("must fail");
    assert!(matches!(error, ConfigError::Parse(_)));
}

#[test]
fn load_rejects_unknown_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(dir.path(), "[server]\nbind = \"127.0.0.1:0\"\nextra = true\n");
    let error = ServiceConfig::load(Some(&path)).expect_err("must fail");
    assert!(matches!(error, ConfigError::Parse(_)));
}

#[test]
fn load_rejects_oversized_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut contents = String::from("[server]\nbind = \"127.0.0.1:0\"\n");
    contents.push_str(&"# padding\n".repeat(10_000));
    let path = write_config(dir.path(), &contents);
    let error = ServiceConfig::load(Some(&path)).expect_err("must fail");
    assert!(matches!(error, ConfigError::TooLarge { .. }));
}

#[test]
fn validate_rejects_bad_bind_address() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(dir.path(), "[server]\nbind = \"not-an-address\"\n");
    let error = ServiceConfig::load(Some(&path)).expect_err("must fail");
    assert!(matches!(error, ConfigError::Invalid(_)));
}

#[test]
fn validate_rejects_excessive_default_delay() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(dir.path(), "[delay]\ndefault_ms = 86400000\n");
    let error = ServiceConfig::load(Some(&path)).expect_err("must fail");
    assert!(matches!(error, ConfigError::Invalid(_)));
}

// crates/loadmark-cli/src/main_tests.rs
// ============================================================================
// Module: CLI Main Helpers Tests
// Description: Unit tests for argument parsing and registry rendering.
// Purpose: Ensure the CLI surface and documentation cards stay stable.
// Dependencies: loadmark-cli main helpers
// ============================================================================

//! ## Overview
//! Validates clap parsing for each subcommand and the text rendering of the
//! endpoint registry.

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

// ============================================================================
// SECTION: Imports
// ============================================================================

use clap::Parser;
use loadmark_contract::endpoint_descriptors;
use loadmark_contract::find_descriptor;

use super::Cli;
use super::Commands;
use super::EndpointsFormat;
use super::render_descriptor_text;
use super::render_registry_text;

// ============================================================================
// SECTION: Argument Parsing
// ============================================================================

#[test]
fn parses_serve_with_config_and_bind() {
    let cli = Cli::try_parse_from([
        "loadmark",
        "serve",
        "--config",
        "loadmark.toml",
        "--bind",
        "127.0.0.1:8080",
    ])
    .expect("parse");
    let Some(Commands::Serve(command)) = cli.command else {
        panic!("expected serve command");
    };
    assert_eq!(command.config.as_deref().map(|p| p.to_string_lossy().into_owned()), Some("loadmark.toml".to_string()));
    assert_eq!(command.bind.as_deref(), Some("127.0.0.1:8080"));
}

#[test]
fn parses_endpoints_format() {
    let cli = Cli::try_parse_from(["loadmark", "endpoints", "--format", "json"]).expect("parse");
    let Some(Commands::Endpoints(command)) = cli.command else {
        panic!("expected endpoints command");
    };
    assert_eq!(command.format, EndpointsFormat::Json);
}

#[test]
fn endpoints_format_defaults_to_text() {
    let cli = Cli::try_parse_from(["loadmark", "endpoints"]).expect("parse");
    let Some(Commands::Endpoints(command)) = cli.command else {
        panic!("expected endpoints command");
    };
    assert_eq!(command.format, EndpointsFormat::Text);
}

#[test]
fn parses_invoke_with_repeated_params() {
    let cli = Cli::try_parse_from([
        "loadmark",
        "invoke",
        "search",
        "--param",
        "query=widgets",
        "--param",
        "limit=2",
        "--base-url",
        "http://127.0.0.1:6000",
        "--timeout",
        "5",
    ])
    .expect("parse");
    let Some(Commands::Invoke(command)) = cli.command else {
        panic!("expected invoke command");
    };
    assert_eq!(command.name, "search");
    assert_eq!(command.params, vec!["query=widgets".to_string(), "limit=2".to_string()]);
    assert_eq!(command.connection.base_url, "http://127.0.0.1:6000");
    assert_eq!(command.connection.timeout, 5);
}

#[test]
fn connection_defaults_match_the_documented_service() {
    let cli = Cli::try_parse_from(["loadmark", "exercise"]).expect("parse");
    let Some(Commands::Exercise(command)) = cli.command else {
        panic!("expected exercise command");
    };
    assert_eq!(command.connection.base_url, "http://127.0.0.1:5000");
    assert_eq!(command.connection.timeout, 30);
}

#[test]
fn rejects_unknown_subcommands() {
    assert!(Cli::try_parse_from(["loadmark", "bogus"]).is_err());
}

// ============================================================================
// SECTION: Registry Rendering
// ============================================================================

#[test]
fn descriptor_card_lists_route_and_params() {
    let descriptor = find_descriptor("search").expect("descriptor");
    let card = render_descriptor_text(&descriptor);
    assert!(card.contains("GET /api/search"));
    assert!(card.contains("query (query, required)"));
    assert!(card.contains("limit (query, optional)"));
    assert!(card.contains("Example response:"));
}

#[test]
fn descriptor_card_marks_paramless_endpoints() {
    let descriptor = find_descriptor("message").expect("descriptor");
    let card = render_descriptor_text(&descriptor);
    assert!(card.contains("Parameters: none"));
}

#[test]
fn registry_text_includes_every_descriptor() {
    let descriptors = endpoint_descriptors();
    let rendered = render_registry_text(&descriptors);
    for descriptor in &descriptors {
        assert!(
            rendered.contains(&format!("({})", descriptor.name)),
            "missing card for {}",
            descriptor.name
        );
    }
}

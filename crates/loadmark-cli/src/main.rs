// crates/loadmark-cli/src/main.rs
// ============================================================================
// Module: Loadmark CLI Entry Point
// Description: Command dispatcher for the mock service and endpoint harness.
// Purpose: Serve the mock routes and drive them from their descriptors.
// Dependencies: clap, loadmark-contract, loadmark-harness, loadmark-server, tokio
// ============================================================================

//! ## Overview
//! The Loadmark CLI starts the mock endpoint service and exercises it through
//! the descriptor registry: `serve` runs the server, `endpoints` renders the
//! registry as documentation, `invoke` calls one endpoint with editable
//! parameters, and `exercise` drives every endpoint concurrently.

// ============================================================================
// SECTION: Modules
// ============================================================================

#[cfg(test)]
mod main_tests;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use loadmark_contract::EndpointDescriptor;
use loadmark_contract::ParamLocation;
use loadmark_contract::endpoint_descriptors;
use loadmark_contract::find_descriptor;
use loadmark_harness::HarnessState;
use loadmark_harness::Invoker;
use loadmark_harness::InvokerConfig;
use loadmark_harness::ParamValues;
use loadmark_harness::example_values;
use loadmark_server::ServiceConfig;
use loadmark_server::StderrRequestLog;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default per-request timeout for harness commands, in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "loadmark", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the mock endpoint service.
    Serve(ServeCommand),
    /// Render the endpoint registry as documentation.
    Endpoints(EndpointsCommand),
    /// Invoke one endpoint from its descriptor.
    Invoke(InvokeCommand),
    /// Invoke every endpoint concurrently with example values.
    Exercise(ExerciseCommand),
}

/// Arguments for `serve`.
#[derive(Args, Debug)]
struct ServeCommand {
    /// Path to the service configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Bind address override, such as `127.0.0.1:5000`.
    #[arg(long, value_name = "ADDR")]
    bind: Option<String>,
}

/// Arguments for `endpoints`.
#[derive(Args, Debug)]
struct EndpointsCommand {
    /// Output format for the rendered registry.
    #[arg(long, value_enum, value_name = "FORMAT", default_value = "text")]
    format: EndpointsFormat,
}

/// Output formats for `endpoints`.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum EndpointsFormat {
    /// Human-readable documentation cards.
    Text,
    /// Machine-readable descriptor array.
    Json,
}

/// Arguments for `invoke`.
#[derive(Args, Debug)]
struct InvokeCommand {
    /// Descriptor name, as listed by `endpoints`.
    #[arg(value_name = "NAME")]
    name: String,
    /// Parameter override as `name=value`; repeatable.
    #[arg(long = "param", value_name = "NAME=VALUE", action = ArgAction::Append)]
    params: Vec<String>,
    /// Harness connection settings.
    #[command(flatten)]
    connection: ConnectionArgs,
}

/// Arguments for `exercise`.
#[derive(Args, Debug)]
struct ExerciseCommand {
    /// Harness connection settings.
    #[command(flatten)]
    connection: ConnectionArgs,
}

/// Shared connection settings for harness commands.
#[derive(Args, Debug)]
struct ConnectionArgs {
    /// Service base URL.
    #[arg(long, value_name = "URL", default_value = loadmark_harness::DEFAULT_BASE_URL)]
    base_url: String,
    /// Per-request timeout in seconds.
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,
}

impl ConnectionArgs {
    /// Builds an invoker from the connection settings.
    fn invoker(&self) -> CliResult<Invoker> {
        Invoker::new(InvokerConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout),
        })
        .map_err(|err| CliError::new(err.to_string()))
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for user-facing messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
async fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&format!("loadmark {version}"))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Serve(command) => command_serve(command).await,
        Commands::Endpoints(command) => command_endpoints(&command),
        Commands::Invoke(command) => command_invoke(command).await,
        Commands::Exercise(command) => command_exercise(command).await,
    }
}

/// Prints top-level usage help.
fn show_help() -> CliResult<()> {
    Cli::command()
        .print_help()
        .map_err(|err| CliError::new(output_error("stdout", &err)))
}

// ============================================================================
// SECTION: Command Handlers
// ============================================================================

/// Runs the mock endpoint service until interrupted.
async fn command_serve(command: ServeCommand) -> CliResult<ExitCode> {
    let mut config = ServiceConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(err.to_string()))?;
    if let Some(bind) = command.bind {
        config.server.bind = bind;
    }
    config.validate().map_err(|err| CliError::new(err.to_string()))?;
    write_stderr_line(&format!("loadmark serving on {}", config.server.bind))
        .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    loadmark_server::server::serve(config, Arc::new(StderrRequestLog))
        .await
        .map_err(|err| CliError::new(err.to_string()))?;
    Ok(ExitCode::SUCCESS)
}

/// Renders the endpoint registry in the requested format.
fn command_endpoints(command: &EndpointsCommand) -> CliResult<ExitCode> {
    let descriptors = endpoint_descriptors();
    let output = match command.format {
        EndpointsFormat::Json => serde_json::to_string_pretty(&descriptors)
            .map_err(|err| CliError::new(format!("registry serialization failed: {err}")))?,
        EndpointsFormat::Text => render_registry_text(&descriptors),
    };
    write_stdout_line(&output).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Invokes one descriptor with example values plus caller overrides.
async fn command_invoke(command: InvokeCommand) -> CliResult<ExitCode> {
    let descriptor = find_descriptor(&command.name).ok_or_else(|| {
        CliError::new(format!(
            "unknown endpoint `{}`; run `loadmark endpoints` for the list",
            command.name
        ))
    })?;
    let mut params = example_values(&descriptor);
    let overrides = ParamValues::from_assignments(&command.params)
        .map_err(|err| CliError::new(err.to_string()))?;
    for (name, value) in overrides.iter() {
        params.set(name, value);
    }
    let invoker = command.connection.invoker()?;
    let invocation = invoker
        .invoke(&descriptor, &params)
        .await
        .map_err(|err| CliError::new(err.to_string()))?;
    write_stdout_line(&format!(
        "{} {} -> {} ({} ms)",
        descriptor.method.as_str(),
        descriptor.path_template,
        invocation.status,
        invocation.elapsed_ms
    ))
    .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line(&invocation.body)
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Drives every descriptor concurrently and prints the captured outcomes.
async fn command_exercise(command: ExerciseCommand) -> CliResult<ExitCode> {
    let invoker = command.connection.invoker()?;
    let state = Arc::new(HarnessState::new());
    let outcomes = invoker.exercise(&state).await;
    let mut failures = 0u32;
    for descriptor in endpoint_descriptors() {
        let outcome = outcomes
            .get(&descriptor.name)
            .map_or("invocation error: no outcome recorded", String::as_str);
        if outcome.starts_with("invocation error:") {
            failures += 1;
        }
        write_stdout_line(&format!("== {} ==", descriptor.name))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        write_stdout_line(outcome)
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    }
    if failures > 0 {
        write_stderr_line(&format!("{failures} endpoint(s) failed"))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Registry Rendering
// ============================================================================

/// Renders the full registry as documentation cards.
fn render_registry_text(descriptors: &[EndpointDescriptor]) -> String {
    let cards: Vec<String> = descriptors.iter().map(render_descriptor_text).collect();
    cards.join("\n")
}

/// Renders one descriptor as a documentation card.
fn render_descriptor_text(descriptor: &EndpointDescriptor) -> String {
    let mut card = String::new();
    card.push_str(&format!("{} ({})\n", descriptor.title, descriptor.name));
    card.push_str(&format!(
        "  {} {}\n",
        descriptor.method.as_str(),
        descriptor.path_template
    ));
    card.push_str(&format!("  {}\n", descriptor.description));
    if descriptor.params.is_empty() {
        card.push_str("  Parameters: none\n");
    } else {
        card.push_str("  Parameters:\n");
        for param in &descriptor.params {
            let requirement = if param.required { "required" } else { "optional" };
            card.push_str(&format!(
                "    {} ({}, {}): {}\n",
                param.name,
                location_label(param.location),
                requirement,
                param.description
            ));
        }
    }
    let example = serde_json::to_string_pretty(&descriptor.example_response)
        .unwrap_or_else(|_| descriptor.example_response.to_string());
    card.push_str("  Example response:\n");
    for line in example.lines() {
        card.push_str(&format!("    {line}\n"));
    }
    card
}

/// Returns the documentation label for a parameter location.
const fn location_label(location: ParamLocation) -> &'static str {
    match location {
        ParamLocation::Query => "query",
        ParamLocation::Path => "path",
        ParamLocation::Body => "body",
    }
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output stream failure message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    format!("failed writing to {stream}: {error}")
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}

// crates/loadmark-server/src/config.rs
// ============================================================================
// Module: Service Configuration
// Description: Configuration loading and validation for the mock service.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from an optional TOML file with strict size
//! limits. Every field has a default, so a missing file yields the default
//! config; a present but invalid file fails closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "loadmark.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "LOADMARK_CONFIG";
/// Maximum configuration file size in bytes.
const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;
/// Default bind address.
const DEFAULT_BIND: &str = "127.0.0.1:5000";
/// Default delay applied by `/api/delayed` when none is supplied.
pub const DEFAULT_DELAY_MS: u64 = 5_000;
/// Upper bound accepted for the configured default delay.
const MAX_DEFAULT_DELAY_MS: u64 = 600_000;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Top-level service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ServiceConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Delayed-route settings.
    pub delay: DelayConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ServerConfig {
    /// Socket address the service binds to.
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

/// Delayed-route settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct DelayConfig {
    /// Delay in milliseconds applied when the caller supplies none.
    pub default_ms: u64,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            default_ms: DEFAULT_DELAY_MS,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("config read error: {0}")]
    Read(String),
    /// Config file exceeds the size limit.
    #[error("config file too large ({actual} > {limit} bytes)")]
    TooLarge {
        /// Actual file size in bytes.
        actual: u64,
        /// Maximum allowed size in bytes.
        limit: u64,
    },
    /// Config file was not valid TOML for this schema.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Config values failed validation.
    #[error("config validation error: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Loading
// ============================================================================

impl ServiceConfig {
    /// Loads configuration from `path`, the env override, or the default
    /// filename. A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when reading, parsing, or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = path.map_or_else(default_config_path, Path::to_path_buf);
        if !resolved.exists() {
            return if path.is_some() || env::var(CONFIG_ENV_VAR).is_ok() {
                Err(ConfigError::Read(format!("config file not found: {}", resolved.display())))
            } else {
                Ok(Self::default())
            };
        }
        let metadata = fs::metadata(&resolved).map_err(|err| ConfigError::Read(err.to_string()))?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::TooLarge {
                actual: metadata.len(),
                limit: MAX_CONFIG_FILE_SIZE,
            });
        }
        let contents =
            fs::read_to_string(&resolved).map_err(|err| ConfigError::Read(err.to_string()))?;
        let config: Self =
            toml::from_str(&contents).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates configured values without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a value is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bind_addr()?;
        if self.delay.default_ms > MAX_DEFAULT_DELAY_MS {
            return Err(ConfigError::Invalid(format!(
                "delay.default_ms exceeds {MAX_DEFAULT_DELAY_MS} ms"
            )));
        }
        Ok(())
    }

    /// Parses the configured bind address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the address does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server
            .bind
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("invalid bind address: {}", self.server.bind)))
    }
}

/// Resolves the config path from the env override or the default filename.
fn default_config_path() -> PathBuf {
    env::var(CONFIG_ENV_VAR).map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_NAME), PathBuf::from)
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;

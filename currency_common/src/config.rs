//! TOML configuration shared by the registry binaries.
//!
//! Every binary embeds [`SharedConfig`] under a `[shared]` table and loads
//! its own config type through [`ConfigLoader`]:
//!
//! ```rust,no_run
//! use currency_common::config::{ConfigError, ConfigLoader, SharedConfig};
//! use serde::Deserialize;
//! use std::path::Path;
//!
//! #[derive(Debug, Deserialize)]
//! struct ToolConfig {
//!     shared: SharedConfig,
//! }
//!
//! fn main() -> Result<(), ConfigError> {
//!     let config = ToolConfig::load(Path::new("registry.toml"))?;
//!     config.shared.validate()?;
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No file at the given path.
    #[error("Configuration file not found: {}", path.display())]
    FileNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The file exists but could not be read.
    #[error("Cannot read configuration {}: {source}", path.display())]
    Read {
        /// Path of the unreadable file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid TOML or a value of the wrong shape.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Well-formed TOML violating a semantic rule.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Log verbosity, spelled in lowercase in TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including per-slot store traffic.
    Trace,
    /// Config loading and rejected duplicates.
    Debug,
    /// Publishes, registrations and genesis transitions.
    #[default]
    Info,
    /// Rejected callers.
    Warn,
    /// Double initialization and other fatal faults.
    Error,
}

impl LogLevel {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`.
    pub const fn as_directive(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single-line output.
    #[default]
    Compact,
    /// One JSON object per event.
    Json,
}

/// The `[shared]` table present in every registry config file.
///
/// ```toml
/// [shared]
/// service_name = "currency-registry-01"
/// log_level = "debug"
/// log_format = "json"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SharedConfig {
    /// Instance name reported in logs and summaries.
    pub service_name: String,

    /// Default verbosity when `RUST_LOG` is unset.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Log output format.
    #[serde(default)]
    pub log_format: LogFormat,
}

impl SharedConfig {
    /// Reject a blank or whitespace-padded `service_name`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let name = self.service_name.as_str();
        if name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "shared.service_name cannot be empty".to_string(),
            ));
        }
        if name.trim() != name {
            return Err(ConfigError::ValidationError(format!(
                "shared.service_name '{name}' has leading or trailing whitespace"
            )));
        }
        Ok(())
    }
}

/// Load any deserializable config type from TOML.
///
/// Blanket-implemented for every `DeserializeOwned` type; validation is left
/// to the caller.
pub trait ConfigLoader: Sized + serde::de::DeserializeOwned {
    /// Read and parse the file at `path`.
    ///
    /// # Errors
    /// `FileNotFound` for a missing file, `Read` for other I/O failures,
    /// `ParseError` (prefixed with the path) for bad TOML.
    fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "loading configuration");
        Self::from_toml_str(&content).map_err(|e| match e {
            ConfigError::ParseError(msg) => {
                ConfigError::ParseError(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    /// Parse TOML already in memory.
    fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

impl<T: serde::de::DeserializeOwned> ConfigLoader for T {}

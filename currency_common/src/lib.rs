//! Currency Registry Common Library
//!
//! Shared types, constants and configuration loading utilities for all
//! crates in the currency registry workspace.
//!
//! # Module Structure
//!
//! - [`identity`] - Account identities and roles
//! - [`currency`] - Currency code byte strings
//! - [`config`] - Configuration loading traits and types
//! - [`consts`] - Workspace-wide constants
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```toml
//! [dependencies]
//! currency_common = { workspace = true }
//! ```
//!
//! Then import:
//! ```rust
//! use currency_common::prelude::*;
//! ```

pub mod config;
pub mod consts;
pub mod currency;
pub mod identity;
pub mod prelude;

use config::{LogFormat, LogLevel};

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; `default_level` applies when it is unset.
/// Calling this more than once is harmless.
pub fn init_tracing(default_level: LogLevel, format: LogFormat) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_directive()));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_line_number(true);

    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
}

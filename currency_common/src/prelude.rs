//! Prelude module for common re-exports.
//!
//! ```rust
//! use currency_common::prelude::*;
//! ```

// ─── Logging ────────────────────────────────────────────────────────
pub use crate::config::{LogFormat, LogLevel};
pub use crate::init_tracing;

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, SharedConfig};

// ─── Constants ──────────────────────────────────────────────────────
pub use crate::consts::{DEFAULT_ADMIN_ADDRESS, DEFAULT_CONFIG_PATH, REGISTERED_CURRENCIES_TAG};

// ─── Domain types ───────────────────────────────────────────────────
pub use crate::currency::CurrencyCode;
pub use crate::identity::{Identity, Role};

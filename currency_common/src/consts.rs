//! Workspace-wide constants.
//!
//! Single source of truth for well-known addresses and default paths.

/// Type tag of the currency registry slot in the configuration store.
pub const REGISTERED_CURRENCIES_TAG: &str = "RegisteredCurrencies";

/// Well-known address of the top-level administrative account.
pub const DEFAULT_ADMIN_ADDRESS: &str = "0xA550C18";

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/currency_registry/registry.toml";

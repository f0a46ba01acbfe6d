//! TOML configuration for the registry binary.
//!
//! Loads `RegistryConfig` and validates: non-empty service name and admin,
//! a single top-level admin, and unique genesis codes.
//!
//! ```toml
//! [shared]
//! service_name = "currency-registry-01"
//! log_level = "info"
//!
//! [authority]
//! admin = "0xA550C18"
//! roles = [
//!     { identity = "0xB1E55ED", role = "treasury_compliance" },
//! ]
//!
//! [genesis]
//! currency_codes = ["XUS", "XDX"]
//! ```

use std::collections::HashSet;
use std::path::Path;

use currency_common::config::{ConfigError, ConfigLoader, SharedConfig};
use currency_common::consts::DEFAULT_ADMIN_ADDRESS;
use currency_common::currency::CurrencyCode;
use currency_common::identity::{Identity, Role};
use serde::Deserialize;

use crate::auth::RoleTable;

/// Complete registry configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Service name and logging.
    pub shared: SharedConfig,
    /// Admin identity and role grants.
    #[serde(default)]
    pub authority: AuthorityConfig,
    /// Codes registered at startup.
    #[serde(default)]
    pub genesis: GenesisConfig,
}

/// Administrative identities.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthorityConfig {
    /// Top-level admin; also the config store's write authority.
    #[serde(default = "default_admin")]
    pub admin: Identity,
    /// Additional role grants.
    #[serde(default)]
    pub roles: Vec<RoleGrant>,
}

impl Default for AuthorityConfig {
    fn default() -> Self {
        Self {
            admin: default_admin(),
            roles: Vec::new(),
        }
    }
}

fn default_admin() -> Identity {
    Identity::new(DEFAULT_ADMIN_ADDRESS)
}

/// One `identity = role` assignment.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoleGrant {
    /// Account receiving the role.
    pub identity: Identity,
    /// Granted role.
    pub role: Role,
}

/// Codes registered during genesis bootstrap, in order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenesisConfig {
    /// Codes as UTF-8 strings; any string, the empty one included, is a code.
    #[serde(default)]
    pub currency_codes: Vec<String>,
}

impl RegistryConfig {
    /// Load and validate from a TOML file.
    pub fn load_validated(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate from a TOML string.
    pub fn from_toml_validated(content: &str) -> Result<Self, ConfigError> {
        let config = Self::from_toml_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Run all validation rules, returning the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shared.validate()?;

        if self.authority.admin.as_str().trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "authority.admin cannot be empty".to_string(),
            ));
        }

        for grant in &self.authority.roles {
            if grant.role == Role::TopLevelAdmin && grant.identity != self.authority.admin {
                return Err(ConfigError::ValidationError(format!(
                    "only authority.admin may hold top_level_admin, found '{}'",
                    grant.identity
                )));
            }
        }

        let mut seen = HashSet::new();
        for code in &self.genesis.currency_codes {
            if !seen.insert(code.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate genesis currency code '{code}'"
                )));
            }
        }

        Ok(())
    }

    /// Genesis codes as byte strings.
    pub fn genesis_codes(&self) -> Vec<CurrencyCode> {
        self.genesis
            .currency_codes
            .iter()
            .map(|c| CurrencyCode::from(c.as_str()))
            .collect()
    }

    /// Role table with the admin and every configured grant.
    pub fn role_table(&self) -> RoleTable {
        let mut table = RoleTable::with_admin(self.authority.admin.clone());
        for grant in &self.authority.roles {
            if grant.identity != self.authority.admin {
                table.grant(grant.identity.clone(), grant.role);
            }
        }
        table
    }
}

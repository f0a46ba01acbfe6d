//! Account identity and role types.
//!
//! `Identity` is the credential a caller presents to a privileged operation.
//! `Role` is the privilege level an authorization check grants to it.

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

// ─── Identity ───────────────────────────────────────────────────────

/// Account address of a caller, e.g. `"0xA550C18"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Create an identity from an address string.
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Identity {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("identity address cannot be empty".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl From<&str> for Identity {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// ─── Role ───────────────────────────────────────────────────────────

/// Privilege level held by an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Single highest-privilege identity; may mutate global configuration.
    TopLevelAdmin,
    /// Treasury and compliance account.
    TreasuryCompliance,
    /// Ordinary operator without configuration rights.
    Operator,
}

impl Role {
    /// Returns true if this role may mutate global configuration.
    #[inline]
    pub const fn is_top_level_admin(self) -> bool {
        matches!(self, Self::TopLevelAdmin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TopLevelAdmin => write!(f, "top_level_admin"),
            Self::TreasuryCompliance => write!(f, "treasury_compliance"),
            Self::Operator => write!(f, "operator"),
        }
    }
}

impl FromStr for Role {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top_level_admin" => Ok(Self::TopLevelAdmin),
            "treasury_compliance" => Ok(Self::TreasuryCompliance),
            "operator" => Ok(Self::Operator),
            _ => Err(format!("unknown Role: {s:?}")),
        }
    }
}

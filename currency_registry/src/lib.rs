//! # Currency Code Registry
//!
//! Global, append-only registry of unique currency codes. The registry is
//! published once during genesis by the top-level admin and afterwards only
//! grows, one code per call, each call publishing a new version of the
//! `RegisteredCurrencies` config slot.
//!
//! ## Collaborators
//!
//! The registry owns no state. It is bound by reference to:
//!
//! 1. **VersionedStore** (`config_store`) — holds the payload
//! 2. **GenesisGate** — is one-time setup still open?
//! 3. **AuthorizationCheck** — is the caller the top-level admin?
//!
//! ## Example
//!
//! ```rust
//! use config_store::InMemoryConfigStore;
//! use currency_common::identity::Identity;
//! use currency_registry::auth::RoleTable;
//! use currency_registry::genesis::GenesisFlag;
//! use currency_registry::registry::CurrencyCodeRegistry;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let admin = Identity::new("0xA550C18");
//! let store = InMemoryConfigStore::new(admin.clone());
//! let genesis = GenesisFlag::new();
//! let roles = RoleTable::with_admin(admin.clone());
//!
//! let registry = CurrencyCodeRegistry::new(&store, &genesis, &roles);
//! registry.initialize(&admin)?;
//! genesis.end_genesis();
//!
//! registry.add_currency_code(&admin, "USD")?;
//! assert_eq!(registry.currency_codes()?.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod bootstrap;
pub mod config;
pub mod currencies;
pub mod error;
pub mod genesis;
pub mod registry;
pub mod state;

pub use currencies::RegisteredCurrencies;
pub use error::{RegistryError, RegistryResult};
pub use registry::CurrencyCodeRegistry;
pub use state::RegistryState;

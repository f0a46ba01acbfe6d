//! Shared fixture: store, genesis flag and role table wired together.

use config_store::InMemoryConfigStore;
use currency_common::identity::{Identity, Role};
use currency_registry::CurrencyCodeRegistry;
use currency_registry::auth::RoleTable;
use currency_registry::genesis::GenesisFlag;

pub type TestRegistry<'a> = CurrencyCodeRegistry<'a, InMemoryConfigStore, GenesisFlag, RoleTable>;

pub fn admin() -> Identity {
    Identity::new("0xA550C18")
}

pub fn non_admin() -> Identity {
    Identity::new("0xB1E55ED")
}

pub struct Harness {
    pub store: InMemoryConfigStore,
    pub genesis: GenesisFlag,
    pub roles: RoleTable,
}

impl Harness {
    pub fn new() -> Self {
        let mut roles = RoleTable::with_admin(admin());
        roles.grant(non_admin(), Role::TreasuryCompliance);
        Self {
            store: InMemoryConfigStore::new(admin()),
            genesis: GenesisFlag::new(),
            roles,
        }
    }

    pub fn registry(&self) -> TestRegistry<'_> {
        CurrencyCodeRegistry::new(&self.store, &self.genesis, &self.roles)
    }

    /// Harness with the registry published and genesis closed.
    pub fn initialized() -> Self {
        let harness = Self::new();
        harness.registry().initialize(&admin()).unwrap();
        harness.genesis.end_genesis();
        harness
    }
}

//! Currency code registry.
//!
//! Holds no state of its own. The list of codes lives in the config store
//! slot tagged `RegisteredCurrencies`; this type only gates and performs
//! the two mutations on it.

use config_store::{ConfigPayload, StoreError, VersionedStore};
use currency_common::currency::CurrencyCode;
use currency_common::identity::Identity;

use crate::auth::AuthorizationCheck;
use crate::currencies::RegisteredCurrencies;
use crate::error::{RegistryError, RegistryResult};
use crate::genesis::GenesisGate;
use crate::state::{RegistryEvent, RegistryState};

/// Registry of unique currency codes backed by a versioned config slot.
pub struct CurrencyCodeRegistry<'a, S, G, A> {
    store: &'a S,
    genesis: &'a G,
    auth: &'a A,
}

impl<'a, S, G, A> CurrencyCodeRegistry<'a, S, G, A>
where
    S: VersionedStore,
    G: GenesisGate,
    A: AuthorizationCheck,
{
    /// Bind the registry to its collaborators.
    pub fn new(store: &'a S, genesis: &'a G, auth: &'a A) -> Self {
        Self {
            store,
            genesis,
            auth,
        }
    }

    /// Publish the empty registry. Allowed once, during genesis, by the admin.
    ///
    /// # Errors
    /// - `NotInGenesis` once genesis has ended
    /// - `NotAuthorized` if `caller` is not the top-level admin
    /// - `AlreadyPublished` on a second call (fatal)
    pub fn initialize(&self, caller: &Identity) -> RegistryResult<()> {
        if !self.genesis.is_genesis_phase() {
            return Err(RegistryError::NotInGenesis);
        }
        self.require_admin(caller)?;
        self.transition(RegistryEvent::Initialize)?;

        match self.store.publish(caller, &RegisteredCurrencies::empty()) {
            Ok(version) => {
                tracing::info!(%caller, version, "currency registry initialized");
                Ok(())
            }
            Err(StoreError::AlreadyExists { type_tag }) => {
                tracing::error!(%caller, type_tag, "currency registry initialized twice");
                Err(RegistryError::AlreadyPublished { type_tag })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Append `code` to the registry and publish the result as a new version.
    ///
    /// Any byte string is accepted, the empty one included. The membership
    /// check and the append run as one store update, so concurrent callers
    /// never observe a half-applied add. Returns the new slot version.
    ///
    /// # Errors
    /// - `NotAuthorized` if `caller` is not the top-level admin
    /// - `CodeAlreadyRegistered` if an identical code is present
    pub fn add_currency_code(
        &self,
        caller: &Identity,
        code: impl Into<CurrencyCode>,
    ) -> RegistryResult<u64> {
        let code = code.into();
        self.require_admin(caller)?;
        self.transition(RegistryEvent::AddCode)?;

        let mut count = 0;
        let result = self
            .store
            .update::<RegisteredCurrencies, RegistryError, _>(caller, |current| {
                let next = current.with_code(code.clone()).ok_or_else(|| {
                    RegistryError::CodeAlreadyRegistered { code: code.clone() }
                })?;
                count = next.len();
                Ok(next)
            });

        match result {
            Ok(version) => {
                tracing::info!(%code, version, count, "currency code registered");
                Ok(version)
            }
            Err(e @ RegistryError::CodeAlreadyRegistered { .. }) => {
                tracing::debug!(%code, "currency code already registered");
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Lifecycle state derived from the store.
    pub fn state(&self) -> RegistryState {
        RegistryState::from_version(self.store.version::<RegisteredCurrencies>())
    }

    /// Registered codes in insertion order.
    pub fn currency_codes(&self) -> RegistryResult<Vec<CurrencyCode>> {
        let current = self.store.read::<RegisteredCurrencies>()?;
        Ok(current.payload.currency_codes().to_vec())
    }

    /// Exact byte-level membership test.
    pub fn is_registered(&self, code: &CurrencyCode) -> RegistryResult<bool> {
        Ok(self
            .store
            .read::<RegisteredCurrencies>()?
            .payload
            .contains(code))
    }

    /// Current slot version, `None` before `initialize`.
    pub fn version(&self) -> Option<u64> {
        self.store.version::<RegisteredCurrencies>()
    }

    fn require_admin(&self, caller: &Identity) -> RegistryResult<()> {
        if !self.auth.is_top_level_admin(caller) {
            tracing::warn!(%caller, "registry mutation rejected: not top-level admin");
            return Err(RegistryError::NotAuthorized {
                identity: caller.to_string(),
            });
        }
        Ok(())
    }

    // Initialize on a published registry is a double initialization; an add
    // on an unpublished one means genesis never ran.
    fn transition(&self, event: RegistryEvent) -> RegistryResult<RegistryState> {
        let state = self.state();
        state.next(event).ok_or_else(|| {
            let type_tag = RegisteredCurrencies::TYPE_TAG;
            tracing::error!(%state, ?event, type_tag, "registry event not allowed");
            match event {
                RegistryEvent::Initialize => RegistryError::AlreadyPublished { type_tag },
                RegistryEvent::AddCode => StoreError::NotFound { type_tag }.into(),
            }
        })
    }
}

//! Genesis bootstrap: publish the registry and register the initial codes.

use config_store::VersionedStore;
use currency_common::currency::CurrencyCode;
use currency_common::identity::Identity;

use crate::auth::AuthorizationCheck;
use crate::error::RegistryResult;
use crate::genesis::GenesisGate;
use crate::registry::CurrencyCodeRegistry;

/// Initialize the registry and register `codes` in order.
///
/// Must run during genesis. Stops at the first failure and returns it;
/// codes registered before the failure stay registered.
pub fn bootstrap<S, G, A>(
    registry: &CurrencyCodeRegistry<'_, S, G, A>,
    admin: &Identity,
    codes: &[CurrencyCode],
) -> RegistryResult<Vec<CurrencyCode>>
where
    S: VersionedStore,
    G: GenesisGate,
    A: AuthorizationCheck,
{
    registry.initialize(admin)?;

    for code in codes {
        registry.add_currency_code(admin, code.clone())?;
    }

    let registered = registry.currency_codes()?;
    tracing::info!(count = registered.len(), "genesis currencies registered");
    Ok(registered)
}

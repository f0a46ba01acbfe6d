//! Lifecycle scenarios: initialize, add, duplicate, unauthorized, double init.

use config_store::VersionedStore;
use currency_common::currency::CurrencyCode;
use currency_registry::{RegisteredCurrencies, RegistryError, RegistryState};

use super::common::{Harness, admin, non_admin};

fn codes(list: &[&str]) -> Vec<CurrencyCode> {
    list.iter().map(|c| CurrencyCode::from(*c)).collect()
}

#[test]
fn scenario_a_initialize_during_genesis() {
    let h = Harness::new();
    let registry = h.registry();
    assert_eq!(registry.state(), RegistryState::Unpublished);

    registry.initialize(&admin()).unwrap();

    assert_eq!(registry.state(), RegistryState::Published);
    assert_eq!(registry.currency_codes().unwrap(), codes(&[]));
}

#[test]
fn scenario_b_add_first_code() {
    let h = Harness::initialized();
    let registry = h.registry();

    registry.add_currency_code(&admin(), "USD").unwrap();
    assert_eq!(registry.currency_codes().unwrap(), codes(&["USD"]));
}

#[test]
fn scenario_c_duplicate_code_rejected() {
    let h = Harness::initialized();
    let registry = h.registry();
    registry.add_currency_code(&admin(), "USD").unwrap();
    let version = registry.version();

    let err = registry.add_currency_code(&admin(), "USD").unwrap_err();
    assert!(matches!(
        err,
        RegistryError::CodeAlreadyRegistered { ref code } if code.as_bytes() == b"USD"
    ));
    assert!(!err.is_fatal());

    assert_eq!(registry.currency_codes().unwrap(), codes(&["USD"]));
    assert_eq!(registry.version(), version);
}

#[test]
fn scenario_d_non_admin_rejected() {
    let h = Harness::initialized();
    let registry = h.registry();
    registry.add_currency_code(&admin(), "USD").unwrap();

    let err = registry.add_currency_code(&non_admin(), "EUR").unwrap_err();
    assert!(matches!(err, RegistryError::NotAuthorized { .. }));

    assert_eq!(registry.currency_codes().unwrap(), codes(&["USD"]));
}

#[test]
fn scenario_e_double_initialize() {
    let h = Harness::new();
    let registry = h.registry();
    registry.initialize(&admin()).unwrap();

    let err = registry.initialize(&admin()).unwrap_err();
    assert!(matches!(err, RegistryError::AlreadyPublished { .. }));
    assert!(err.is_fatal());

    let stored = h.store.read::<RegisteredCurrencies>().unwrap();
    assert_eq!(stored.version, 1);
    assert!(stored.payload.is_empty());
}

#[test]
fn second_initialize_fails_for_any_caller_and_phase() {
    let h = Harness::initialized();
    let registry = h.registry();
    registry.add_currency_code(&admin(), "XUS").unwrap();

    assert!(matches!(
        registry.initialize(&admin()),
        Err(RegistryError::NotInGenesis)
    ));
    assert!(matches!(
        registry.initialize(&non_admin()),
        Err(RegistryError::NotInGenesis)
    ));
    assert_eq!(registry.currency_codes().unwrap(), codes(&["XUS"]));
}

#[test]
fn initialize_after_genesis_rejected() {
    let h = Harness::new();
    h.genesis.end_genesis();

    assert!(matches!(
        h.registry().initialize(&admin()),
        Err(RegistryError::NotInGenesis)
    ));
    assert_eq!(h.registry().state(), RegistryState::Unpublished);
}

#[test]
fn payload_readable_for_rest_of_lifetime() {
    let h = Harness::initialized();
    let registry = h.registry();

    for code in ["XUS", "XDX", "EUR"] {
        registry.add_currency_code(&admin(), code).unwrap();
        let _ = registry.add_currency_code(&non_admin(), "GBP");
        let _ = registry.initialize(&admin());
        assert!(h.store.read::<RegisteredCurrencies>().is_ok());
    }
    assert_eq!(
        registry.currency_codes().unwrap(),
        codes(&["XUS", "XDX", "EUR"])
    );
}

//! Genesis driven by a registry.toml on disk.

use config_store::{InMemoryConfigStore, SlotReader};
use currency_common::config::ConfigError;
use currency_common::currency::CurrencyCode;
use currency_registry::bootstrap::bootstrap;
use currency_registry::config::RegistryConfig;
use currency_registry::genesis::GenesisFlag;
use currency_registry::{CurrencyCodeRegistry, RegisteredCurrencies, RegistryError};
use std::fs;
use tempfile::TempDir;

const REGISTRY_TOML: &str = r#"
[shared]
service_name = "registry-genesis-test"

[authority]
admin = "0xA550C18"
roles = [
    { identity = "0xB1E55ED", role = "treasury_compliance" },
]

[genesis]
currency_codes = ["XUS", "XDX"]
"#;

#[test]
fn genesis_from_config_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("registry.toml");
    fs::write(&path, REGISTRY_TOML).unwrap();

    let config = RegistryConfig::load_validated(&path).expect("should load");
    let admin = config.authority.admin.clone();
    let store = InMemoryConfigStore::new(admin.clone());
    let genesis = GenesisFlag::new();
    let roles = config.role_table();
    let registry = CurrencyCodeRegistry::new(&store, &genesis, &roles);

    let registered = bootstrap(&registry, &admin, &config.genesis_codes()).unwrap();
    genesis.end_genesis();
    assert_eq!(
        registered,
        vec![CurrencyCode::from("XUS"), CurrencyCode::from("XDX")]
    );

    let mut reader = SlotReader::<RegisteredCurrencies>::attach(&store).unwrap();
    assert_eq!(reader.read().unwrap().len(), 2);
    assert_eq!(reader.version(), 3);

    // Post-genesis additions are visible to subscribers as a new version.
    registry.add_currency_code(&admin, "EUR").unwrap();
    assert!(reader.has_changed());
    assert_eq!(reader.read().unwrap().len(), 3);

    // Treasury compliance cannot mutate the registry.
    let tc = "0xB1E55ED".parse().unwrap();
    assert!(matches!(
        registry.add_currency_code(&tc, "GBP"),
        Err(RegistryError::NotAuthorized { .. })
    ));
}

#[test]
fn missing_config_file() {
    let tmp = TempDir::new().unwrap();
    let result = RegistryConfig::load_validated(&tmp.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
}

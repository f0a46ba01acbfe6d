//! Property tests: uniqueness, append-only order, authorization gating.

use currency_common::currency::CurrencyCode;
use currency_registry::RegistryError;
use proptest::prelude::*;
use std::sync::{Arc, Barrier};
use std::thread;

use super::common::{Harness, admin, non_admin};

fn code_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        // Small alphabet, including the empty code, so duplicates are common.
        3 => proptest::collection::vec(prop_oneof![Just(b'A'), Just(b'B'), Just(b'a')], 0..3),
        1 => proptest::collection::vec(any::<u8>(), 0..64),
    ]
}

proptest! {
    #[test]
    fn codes_stay_unique_and_append_only(attempts in proptest::collection::vec(code_strategy(), 0..40)) {
        let h = Harness::initialized();
        let registry = h.registry();

        for raw in attempts {
            let code = CurrencyCode::new(raw);
            let before = registry.currency_codes().unwrap();

            match registry.add_currency_code(&admin(), code.clone()) {
                Ok(_) => {
                    prop_assert!(!before.contains(&code));
                    let mut expected = before.clone();
                    expected.push(code);
                    prop_assert_eq!(registry.currency_codes().unwrap(), expected);
                }
                Err(RegistryError::CodeAlreadyRegistered { .. }) => {
                    prop_assert!(before.contains(&code));
                    prop_assert_eq!(registry.currency_codes().unwrap(), before);
                }
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }
        }

        let after = registry.currency_codes().unwrap();
        for (i, code) in after.iter().enumerate() {
            prop_assert!(!after[..i].contains(code));
        }
    }

    #[test]
    fn non_admin_never_mutates(
        seeded in proptest::collection::vec(code_strategy(), 0..8),
        attempt in code_strategy(),
    ) {
        let h = Harness::initialized();
        let registry = h.registry();
        for raw in seeded {
            let _ = registry.add_currency_code(&admin(), CurrencyCode::new(raw));
        }
        let before = registry.currency_codes().unwrap();
        let version = registry.version();

        let result = registry.add_currency_code(&non_admin(), CurrencyCode::new(attempt));
        prop_assert!(
            matches!(result, Err(RegistryError::NotAuthorized { .. })),
            "expected NotAuthorized, got {:?}",
            result
        );
        prop_assert_eq!(registry.currency_codes().unwrap(), before);
        prop_assert_eq!(registry.version(), version);
    }
}

#[test]
fn concurrent_adds_keep_codes_unique() {
    let h = Arc::new(Harness::initialized());
    let barrier = Arc::new(Barrier::new(8));

    // Every thread tries the same 20 codes, so each code races eight ways.
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let h = Arc::clone(&h);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let registry = h.registry();
                let mut registered = Vec::new();
                barrier.wait();
                for i in 0..20 {
                    let code = CurrencyCode::from(format!("C{i:02}").as_str());
                    match registry.add_currency_code(&admin(), code.clone()) {
                        Ok(_) => registered.push(code),
                        Err(RegistryError::CodeAlreadyRegistered { .. }) => {}
                        Err(e) => panic!("unexpected error: {e}"),
                    }
                }
                registered
            })
        })
        .collect();

    let mut registered: Vec<CurrencyCode> = handles
        .into_iter()
        .flat_map(|handle| handle.join().unwrap())
        .collect();

    let stored = h.registry().currency_codes().unwrap();
    assert_eq!(stored.len(), 20);
    assert_eq!(registered.len(), 20);
    for (i, code) in stored.iter().enumerate() {
        assert!(!stored[..i].contains(code));
    }

    registered.sort();
    let mut sorted = stored.clone();
    sorted.sort();
    assert_eq!(sorted, registered);
    assert_eq!(h.registry().version(), Some(21));
}

#[test]
fn concurrent_distinct_adds_all_succeed() {
    let h = Arc::new(Harness::initialized());
    let barrier = Arc::new(Barrier::new(16));

    let handles: Vec<_> = (0..16u32)
        .map(|t| {
            let h = Arc::clone(&h);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let registry = h.registry();
                barrier.wait();
                for i in 0..50u32 {
                    let code = CurrencyCode::from(format!("T{t:02}-{i:02}").as_str());
                    if let Err(e) = registry.add_currency_code(&admin(), code) {
                        panic!("add of a fresh code failed: {e}");
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let stored = h.registry().currency_codes().unwrap();
    assert_eq!(stored.len(), 800);
    assert_eq!(h.registry().version(), Some(801));
}

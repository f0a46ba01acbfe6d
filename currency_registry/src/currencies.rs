//! Registry payload stored in the config store.

use config_store::ConfigPayload;
use currency_common::consts::REGISTERED_CURRENCIES_TAG;
use currency_common::currency::CurrencyCode;
use serde::{Deserialize, Serialize};

/// Ordered, duplicate-free list of registered currency codes.
///
/// Order records insertion history only. Values are never edited in place:
/// [`with_code`](Self::with_code) produces the successor payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredCurrencies {
    currency_codes: Vec<CurrencyCode>,
}

impl RegisteredCurrencies {
    /// Payload published at genesis.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registered codes in insertion order.
    pub fn currency_codes(&self) -> &[CurrencyCode] {
        &self.currency_codes
    }

    /// Exact byte-level membership test.
    pub fn contains(&self, code: &CurrencyCode) -> bool {
        self.currency_codes.iter().any(|c| c == code)
    }

    /// Number of registered codes.
    pub fn len(&self) -> usize {
        self.currency_codes.len()
    }

    /// Returns true if no code is registered.
    pub fn is_empty(&self) -> bool {
        self.currency_codes.is_empty()
    }

    /// Successor payload with `code` appended, or `None` if already present.
    pub fn with_code(&self, code: CurrencyCode) -> Option<Self> {
        if self.contains(&code) {
            return None;
        }
        let mut currency_codes = Vec::with_capacity(self.currency_codes.len() + 1);
        currency_codes.extend_from_slice(&self.currency_codes);
        currency_codes.push(code);
        let next = Self { currency_codes };
        debug_assert!(next.is_unique());
        Some(next)
    }

    /// Returns true if no two codes are equal.
    pub fn is_unique(&self) -> bool {
        self.currency_codes
            .iter()
            .enumerate()
            .all(|(i, code)| !self.currency_codes[..i].contains(code))
    }
}

impl ConfigPayload for RegisteredCurrencies {
    const TYPE_TAG: &'static str = REGISTERED_CURRENCIES_TAG;
}

//! Change-tracking reader for a single config slot

use crate::error::StoreResult;
use crate::payload::ConfigPayload;
use crate::store::{InMemoryConfigStore, VersionedStore};
use crate::version::VersionCounter;
use std::marker::PhantomData;
use std::sync::Arc;

/// Subscriber handle that remembers the last version it consumed.
///
/// `has_changed` is lock-free: it compares the slot's shared version counter
/// with the last version returned by `read`.
pub struct SlotReader<'a, T: ConfigPayload> {
    store: &'a InMemoryConfigStore,
    version: Arc<VersionCounter>,
    last_seen_version: u64,
    _payload: PhantomData<T>,
}

impl<'a, T: ConfigPayload> SlotReader<'a, T> {
    /// Attach to a published slot.
    ///
    /// The reader starts with nothing consumed, so `has_changed` is true
    /// until the first `read`.
    ///
    /// # Errors
    /// `NotFound` if the slot was never published.
    pub fn attach(store: &'a InMemoryConfigStore) -> StoreResult<Self> {
        let version = store.version_handle::<T>()?;
        Ok(Self {
            store,
            version,
            last_seen_version: 0,
            _payload: PhantomData,
        })
    }

    /// Read the current payload and mark its version as seen
    pub fn read(&mut self) -> StoreResult<T> {
        let current = self.store.read::<T>()?;
        self.last_seen_version = current.version;
        Ok(current.payload)
    }

    /// Read only if the slot changed since the last read
    pub fn read_if_changed(&mut self) -> StoreResult<Option<T>> {
        if !self.has_changed() {
            return Ok(None);
        }
        self.read().map(Some)
    }

    /// Last version returned by `read`
    pub fn version(&self) -> u64 {
        self.last_seen_version
    }

    /// Check if the slot has been replaced since the last read
    pub fn has_changed(&self) -> bool {
        self.version.load() != self.last_seen_version
    }
}

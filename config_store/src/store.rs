//! Versioned store trait and in-memory implementation

use crate::error::{StoreError, StoreResult};
use crate::payload::{ConfigPayload, Versioned};
use crate::version::VersionCounter;
use currency_common::identity::Identity;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::SystemTime;

/// Store holding one payload per [`ConfigPayload::TYPE_TAG`].
///
/// Implementations serialize all access to a slot: an `update` closure sees
/// the latest payload and no other write lands between its read and its
/// write.
pub trait VersionedStore {
    /// Publish the first payload of a slot as version 1.
    ///
    /// # Errors
    /// `PermissionDenied` if `identity` may not write config,
    /// `AlreadyExists` if the slot is already published.
    fn publish<T: ConfigPayload>(&self, identity: &Identity, payload: &T) -> StoreResult<u64>;

    /// Read the current payload and its version.
    ///
    /// # Errors
    /// `NotFound` if the slot was never published.
    fn read<T: ConfigPayload>(&self) -> StoreResult<Versioned<T>>;

    /// Overwrite the payload unconditionally and bump the version.
    fn replace<T: ConfigPayload>(&self, identity: &Identity, payload: &T) -> StoreResult<u64>;

    /// Overwrite the payload only if the slot is still at `expected`.
    ///
    /// # Errors
    /// `VersionConflict` if another replace happened since `expected` was read.
    fn replace_if_version<T: ConfigPayload>(
        &self,
        identity: &Identity,
        expected: u64,
        payload: &T,
    ) -> StoreResult<u64>;

    /// Atomic read-modify-write.
    ///
    /// Runs `f` on the current payload while holding the slot exclusively and
    /// stores its result as the next version. If `f` fails the slot is left
    /// untouched and its error is returned as is.
    ///
    /// # Errors
    /// `PermissionDenied`, `NotFound` or `Json` converted into `E`, or the
    /// error returned by `f`.
    fn update<T, E, F>(&self, identity: &Identity, f: F) -> Result<u64, E>
    where
        T: ConfigPayload,
        E: From<StoreError>,
        F: FnOnce(T) -> Result<T, E>;

    /// Current version of a slot, `None` if unpublished.
    fn version<T: ConfigPayload>(&self) -> Option<u64>;

    /// Returns true if the slot is published.
    fn contains<T: ConfigPayload>(&self) -> bool {
        self.version::<T>().is_some()
    }
}

/// Slot metadata for discovery and diagnostics
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SlotInfo {
    /// Slot type tag
    pub type_tag: String,
    /// Current version
    pub version: u64,
    /// Encoded payload size in bytes
    pub size: usize,
    /// Identity that performed the last write
    pub last_writer: Identity,
    /// Publish timestamp
    pub published_at: SystemTime,
    /// Last write timestamp
    pub last_write: SystemTime,
}

struct Slot {
    bytes: Vec<u8>,
    version: Arc<VersionCounter>,
    last_writer: Identity,
    published_at: SystemTime,
    last_write: SystemTime,
}

impl Slot {
    fn commit(&mut self, bytes: Vec<u8>, identity: &Identity) -> u64 {
        self.bytes = bytes;
        self.last_writer = identity.clone();
        self.last_write = SystemTime::now();
        self.version.bump()
    }

    fn info(&self, type_tag: &str) -> SlotInfo {
        SlotInfo {
            type_tag: type_tag.to_string(),
            version: self.version.load(),
            size: self.bytes.len(),
            last_writer: self.last_writer.clone(),
            published_at: self.published_at,
            last_write: self.last_write,
        }
    }
}

/// In-process configuration store.
///
/// Payloads are kept as JSON bytes so every read hands out an independent
/// copy. Only the config authority given at construction may publish or
/// replace.
pub struct InMemoryConfigStore {
    authority: Identity,
    slots: RwLock<HashMap<&'static str, Slot>>,
}

impl InMemoryConfigStore {
    /// Create an empty store writable only by `authority`
    pub fn new(authority: Identity) -> Self {
        Self {
            authority,
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// Identity allowed to write config
    pub fn authority(&self) -> &Identity {
        &self.authority
    }

    /// Metadata of a single slot
    pub fn slot_info<T: ConfigPayload>(&self) -> Option<SlotInfo> {
        self.slots
            .read()
            .get(T::TYPE_TAG)
            .map(|slot| slot.info(T::TYPE_TAG))
    }

    /// Metadata of all published slots, sorted by type tag
    pub fn list_slots(&self) -> Vec<SlotInfo> {
        let slots = self.slots.read();
        let mut infos: Vec<SlotInfo> = slots.iter().map(|(tag, slot)| slot.info(tag)).collect();
        infos.sort_by(|a, b| a.type_tag.cmp(&b.type_tag));
        infos
    }

    /// Shared version counter of a slot, for lock-free change detection
    pub(crate) fn version_handle<T: ConfigPayload>(&self) -> StoreResult<Arc<VersionCounter>> {
        self.slots
            .read()
            .get(T::TYPE_TAG)
            .map(|slot| Arc::clone(&slot.version))
            .ok_or(StoreError::NotFound {
                type_tag: T::TYPE_TAG,
            })
    }

    fn check_authority<T: ConfigPayload>(&self, identity: &Identity) -> StoreResult<()> {
        if *identity != self.authority {
            tracing::warn!(%identity, type_tag = T::TYPE_TAG, "config write rejected");
            return Err(StoreError::PermissionDenied {
                identity: identity.to_string(),
                type_tag: T::TYPE_TAG,
            });
        }
        Ok(())
    }

    fn write_slot<T: ConfigPayload>(
        &self,
        identity: &Identity,
        expected: Option<u64>,
        payload: &T,
    ) -> StoreResult<u64> {
        self.check_authority::<T>(identity)?;
        let bytes = serde_json::to_vec(payload)?;

        let mut slots = self.slots.write();
        let slot = slots.get_mut(T::TYPE_TAG).ok_or(StoreError::NotFound {
            type_tag: T::TYPE_TAG,
        })?;

        if let Some(expected) = expected {
            let actual = slot.version.load();
            if actual != expected {
                return Err(StoreError::VersionConflict {
                    type_tag: T::TYPE_TAG,
                    expected,
                    actual,
                });
            }
        }

        let version = slot.commit(bytes, identity);
        tracing::info!(type_tag = T::TYPE_TAG, version, "config replaced");
        Ok(version)
    }
}

impl VersionedStore for InMemoryConfigStore {
    fn publish<T: ConfigPayload>(&self, identity: &Identity, payload: &T) -> StoreResult<u64> {
        self.check_authority::<T>(identity)?;
        let bytes = serde_json::to_vec(payload)?;

        let mut slots = self.slots.write();
        if slots.contains_key(T::TYPE_TAG) {
            return Err(StoreError::AlreadyExists {
                type_tag: T::TYPE_TAG,
            });
        }

        let counter = VersionCounter::new();
        let version = counter.publish();
        let now = SystemTime::now();
        slots.insert(
            T::TYPE_TAG,
            Slot {
                bytes,
                version: Arc::new(counter),
                last_writer: identity.clone(),
                published_at: now,
                last_write: now,
            },
        );

        tracing::info!(type_tag = T::TYPE_TAG, version, "config published");
        Ok(version)
    }

    fn read<T: ConfigPayload>(&self) -> StoreResult<Versioned<T>> {
        let slots = self.slots.read();
        let slot = slots.get(T::TYPE_TAG).ok_or(StoreError::NotFound {
            type_tag: T::TYPE_TAG,
        })?;

        Ok(Versioned {
            payload: serde_json::from_slice(&slot.bytes)?,
            version: slot.version.load(),
        })
    }

    fn replace<T: ConfigPayload>(&self, identity: &Identity, payload: &T) -> StoreResult<u64> {
        self.write_slot(identity, None, payload)
    }

    fn replace_if_version<T: ConfigPayload>(
        &self,
        identity: &Identity,
        expected: u64,
        payload: &T,
    ) -> StoreResult<u64> {
        self.write_slot(identity, Some(expected), payload)
    }

    fn update<T, E, F>(&self, identity: &Identity, f: F) -> Result<u64, E>
    where
        T: ConfigPayload,
        E: From<StoreError>,
        F: FnOnce(T) -> Result<T, E>,
    {
        self.check_authority::<T>(identity)?;

        let mut slots = self.slots.write();
        let slot = slots.get_mut(T::TYPE_TAG).ok_or(StoreError::NotFound {
            type_tag: T::TYPE_TAG,
        })?;

        let current: T = serde_json::from_slice(&slot.bytes).map_err(StoreError::from)?;
        let next = f(current)?;
        let bytes = serde_json::to_vec(&next).map_err(StoreError::from)?;

        let version = slot.commit(bytes, identity);
        tracing::info!(type_tag = T::TYPE_TAG, version, "config updated");
        Ok(version)
    }

    fn version<T: ConfigPayload>(&self) -> Option<u64> {
        self.slots
            .read()
            .get(T::TYPE_TAG)
            .map(|slot| slot.version.load())
            .filter(|&version| VersionCounter::is_published(version))
    }
}

//! Atomic version counter for published config slots

use std::sync::atomic::{AtomicU64, Ordering};

/// Version of an unpublished slot.
pub const UNPUBLISHED: u64 = 0;

/// Version assigned by the first publish.
pub const FIRST_VERSION: u64 = 1;

/// Monotonic slot version.
///
/// Starts at [`UNPUBLISHED`], becomes [`FIRST_VERSION`] on publish and grows
/// by one on every replace. Readers compare versions to detect changes
/// without taking the store lock.
#[derive(Debug)]
pub struct VersionCounter {
    counter: AtomicU64,
}

impl VersionCounter {
    /// Create a new, unpublished version counter
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(UNPUBLISHED),
        }
    }

    /// Get current version with acquire ordering
    pub fn load(&self) -> u64 {
        self.counter.load(Ordering::Acquire)
    }

    /// Mark the slot as published and return the first version
    pub fn publish(&self) -> u64 {
        self.counter.store(FIRST_VERSION, Ordering::Release);
        FIRST_VERSION
    }

    /// Increment after a replace and return the new version
    pub fn bump(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Check if a version denotes a published slot
    pub fn is_published(version: u64) -> bool {
        version >= FIRST_VERSION
    }
}

impl Default for VersionCounter {
    fn default() -> Self {
        Self::new()
    }
}

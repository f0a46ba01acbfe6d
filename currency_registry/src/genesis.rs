//! Genesis phase detection.

use std::sync::atomic::{AtomicBool, Ordering};

/// Tells whether the system is still in its one-time setup phase.
pub trait GenesisGate {
    /// Returns true while genesis is in progress.
    fn is_genesis_phase(&self) -> bool;
}

/// One-way genesis switch.
///
/// Starts in genesis; [`end_genesis`](Self::end_genesis) leaves it for good.
#[derive(Debug)]
pub struct GenesisFlag {
    active: AtomicBool,
}

impl GenesisFlag {
    /// A flag in the genesis phase.
    pub const fn new() -> Self {
        Self {
            active: AtomicBool::new(true),
        }
    }

    /// A flag whose genesis phase is already over.
    pub const fn post_genesis() -> Self {
        Self {
            active: AtomicBool::new(false),
        }
    }

    /// Leave the genesis phase. Returns true if this call ended it.
    pub fn end_genesis(&self) -> bool {
        let ended = self.active.swap(false, Ordering::AcqRel);
        if ended {
            tracing::info!("genesis phase ended");
        }
        ended
    }
}

impl Default for GenesisFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl GenesisGate for GenesisFlag {
    fn is_genesis_phase(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}

//! # Versioned Configuration Store
//!
//! Holds global configuration as one payload per type. Each payload type
//! names its own slot through [`ConfigPayload::TYPE_TAG`]; a slot is
//! published exactly once and afterwards only replaced as a whole, with a
//! version bump per replace. [`VersionedStore::update`] performs a
//! read-modify-write under the slot lock.
//!
//! ## Slot Lifecycle
//!
//! ```text
//!   unpublished ──publish──► version 1 ──replace──► version 2 ──► ...
//!        │                       │
//!        └── read: NotFound      └── publish again: AlreadyExists
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use config_store::{ConfigPayload, InMemoryConfigStore, SlotReader, VersionedStore};
//! use currency_common::identity::Identity;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Serialize, Deserialize)]
//! struct FeeSchedule {
//!     base_fee: u64,
//! }
//!
//! impl ConfigPayload for FeeSchedule {
//!     const TYPE_TAG: &'static str = "FeeSchedule";
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let admin = Identity::new("0xA550C18");
//! let store = InMemoryConfigStore::new(admin.clone());
//!
//! store.publish(&admin, &FeeSchedule { base_fee: 10 })?;
//! let mut reader = SlotReader::<FeeSchedule>::attach(&store)?;
//! reader.read()?;
//!
//! store.replace(&admin, &FeeSchedule { base_fee: 12 })?;
//! assert!(reader.has_changed());
//! assert_eq!(reader.read()?.base_fee, 12);
//! # Ok(())
//! # }
//! ```
//!
//! ## Thread Safety
//!
//! - **InMemoryConfigStore**: `Send + Sync`, all slot access behind one `RwLock`
//! - **SlotReader**: one per subscriber; change checks never take the lock

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod payload;
pub mod reader;
pub mod store;
pub mod version;

pub use error::{StoreError, StoreResult};
pub use payload::{ConfigPayload, Versioned};
pub use reader::SlotReader;
pub use store::{InMemoryConfigStore, SlotInfo, VersionedStore};
pub use version::VersionCounter;

//! Payload contract for config slots

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A value stored in exactly one slot of the configuration store.
///
/// The slot is keyed by `TYPE_TAG`; two payload types must never share a tag.
pub trait ConfigPayload: Serialize + DeserializeOwned + Clone {
    /// Slot key of this payload type.
    const TYPE_TAG: &'static str;
}

/// A payload together with the slot version it was read at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Versioned<T> {
    /// Decoded payload.
    pub payload: T,
    /// Slot version at read time.
    pub version: u64,
}

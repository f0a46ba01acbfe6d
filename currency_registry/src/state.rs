//! Registry lifecycle: Unpublished → Published.
//!
//! `initialize` is the only transition. `add_currency_code` is a self-loop
//! on Published. Published is terminal.

use core::fmt;

/// Lifecycle state of the registry slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryState {
    /// No payload in the store yet.
    Unpublished,
    /// Payload published; persists for the lifetime of the system.
    Published,
}

/// Operation that may be applied to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryEvent {
    /// One-time publish of the empty payload.
    Initialize,
    /// Append one code to the published payload.
    AddCode,
}

impl RegistryState {
    /// State implied by a slot version (`None` = unpublished).
    #[inline]
    pub const fn from_version(version: Option<u64>) -> Self {
        match version {
            Some(_) => Self::Published,
            None => Self::Unpublished,
        }
    }

    /// Returns true once `initialize` has succeeded.
    #[inline]
    pub const fn is_published(self) -> bool {
        matches!(self, Self::Published)
    }

    /// State after `event`, or `None` if the event is not allowed here.
    pub const fn next(self, event: RegistryEvent) -> Option<Self> {
        match (self, event) {
            (Self::Unpublished, RegistryEvent::Initialize) => Some(Self::Published),
            (Self::Published, RegistryEvent::AddCode) => Some(Self::Published),
            _ => None,
        }
    }
}

impl fmt::Display for RegistryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unpublished => write!(f, "unpublished"),
            Self::Published => write!(f, "published"),
        }
    }
}

//! Registry error taxonomy.
//!
//! Every variant is returned before any write: a failed call leaves the
//! stored payload exactly as it was.

use config_store::StoreError;
use currency_common::currency::CurrencyCode;
use thiserror::Error;

/// Errors returned by registry operations.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Initialization attempted after the genesis phase ended.
    #[error("Genesis phase has ended")]
    NotInGenesis,

    /// Caller lacks the top-level administrative role.
    #[error("Identity {identity} is not the top-level admin")]
    NotAuthorized {
        /// Rejected caller
        identity: String,
    },

    /// Registry payload already exists. Indicates a double initialization.
    #[error("Registry already published: {type_tag}")]
    AlreadyPublished {
        /// Slot type tag
        type_tag: &'static str,
    },

    /// Code is already present in the registry.
    #[error("Currency code already registered: {code}")]
    CodeAlreadyRegistered {
        /// Duplicate code
        code: CurrencyCode,
    },

    /// Store failure outside the registry taxonomy.
    #[error("Config store error: {source}")]
    Store {
        /// Source store error
        #[from]
        source: StoreError,
    },
}

impl RegistryError {
    /// Returns true for errors that indicate a deployment or programming
    /// fault rather than a rejected request.
    ///
    /// `NotFound` after genesis and `PermissionDenied` from the store both
    /// mean the registry and its store disagree about setup.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::AlreadyPublished { .. } => true,
            Self::Store { source } => !matches!(source, StoreError::VersionConflict { .. }),
            _ => false,
        }
    }
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

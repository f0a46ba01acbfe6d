//! Error types for configuration store operations

use thiserror::Error;

/// Errors that can occur during configuration store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// A payload for this type tag was already published
    #[error("Config already published: {type_tag}")]
    AlreadyExists {
        /// Slot type tag
        type_tag: &'static str,
    },

    /// No payload has been published for this type tag
    #[error("Config not published: {type_tag}")]
    NotFound {
        /// Slot type tag
        type_tag: &'static str,
    },

    /// Identity is not the store's config authority
    #[error("Permission denied for {identity} on config: {type_tag}")]
    PermissionDenied {
        /// Rejected identity
        identity: String,
        /// Slot type tag
        type_tag: &'static str,
    },

    /// Slot was replaced since the caller read it
    #[error("Version conflict on {type_tag}: expected {expected}, found {actual}")]
    VersionConflict {
        /// Slot type tag
        type_tag: &'static str,
        /// Version the caller read
        expected: u64,
        /// Version currently stored
        actual: u64,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {source}")]
    Json {
        /// Source JSON error
        #[from]
        source: serde_json::Error,
    },
}

/// Result type for configuration store operations
pub type StoreResult<T> = Result<T, StoreError>;

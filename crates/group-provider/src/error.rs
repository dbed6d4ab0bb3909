//! Error types for group-provider

/// Result type for provider operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors a directory provider can surface
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The named group does not exist where the operation requires it to
    #[error("Group not found: {name}")]
    GroupNotFound { name: String },

    /// The host rejected a membership write
    #[error("Apply rejected for group {group}: {reason}")]
    ApplyRejected { group: String, reason: String },

    /// Opaque failure from the underlying directory service
    #[error("Directory backend error: {0}")]
    Backend(String),
}

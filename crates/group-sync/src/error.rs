//! Error types for group-sync

/// Result type for reconciliation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during reconciliation
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // Transparent wrappers for underlying crate errors
    /// Directory provider failure, including apply failures
    #[error(transparent)]
    Provider(#[from] group_provider::Error),

    /// Data-model or manifest failure
    #[error(transparent)]
    Core(#[from] group_core::Error),
}

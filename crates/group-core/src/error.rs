//! Error types for group-core

/// Result type for group-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in group-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid enforcement mode specified
    #[error("Invalid enforcement mode: {mode}")]
    InvalidMode { mode: String },

    /// A declared membership value of a shape the normalizer cannot interpret
    #[error("Malformed membership value: {detail}")]
    MalformedValue { detail: String },

    // Transparent wrappers for underlying crate errors
    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}

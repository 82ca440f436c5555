/// Errors from datastore operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The document could not be loaded on first access.
    #[error("failed to initialize datastore, check {location}: {reason}")]
    Init { location: String, reason: String },

    /// A request reached a handler without a store attached to it.
    #[error("datastore connection not available")]
    Unavailable,

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

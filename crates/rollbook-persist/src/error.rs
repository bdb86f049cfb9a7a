/// Errors from slot store operations.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization failure while writing a collection.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result alias for slot store operations.
pub type PersistResult<T> = Result<T, PersistError>;

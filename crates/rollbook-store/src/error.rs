use rollbook_persist::PersistError;

/// Errors from registry store operations.
///
/// Not-found never appears here: lookups return `Option`/empty and
/// mutations of absent ids are no-ops. The only failure a store operation
/// can surface is the persistence mirror rejecting a write.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The persistence backend failed to load or save a collection.
    #[error("persistence error: {0}")]
    Persist(#[from] PersistError),
}

/// Result alias for registry store operations.
pub type StoreResult<T> = Result<T, StoreError>;

use thiserror::Error;
use uuid::Uuid;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by storage backends regardless of the underlying database.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A palette with the same identifier is already stored.
    #[error("palette `{0}` already exists")]
    Duplicate(Uuid),
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A writer panicked while holding the lock; the store is no longer
    /// trustworthy.
    #[error("storage lock poisoned")]
    Poisoned,

    #[error("duplicate record: {0}")]
    Duplicate(String),

    #[error("record not found: {0}")]
    NotFound(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

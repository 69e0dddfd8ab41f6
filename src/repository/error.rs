use thiserror::Error;

/// Errors surfaced by the repository.
///
/// `Delete` on a missing entry and `store` with an empty name are not
/// errors — see the operation docs on [`crate::repository::FileRepository`].
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Stored state cannot be read: the directory itself (removed after
    /// startup, permission denied) or an existing entry's content (I/O
    /// failure, or a note whose bytes are not valid UTF-8).
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[source] std::io::Error),

    /// A write to an entry failed (disk full, permission denied).
    #[error("write failed: {0}")]
    Write(#[source] std::io::Error),

    /// No entry with the requested name exists. An existing zero-length
    /// entry is *not* NotFound.
    #[error("entry not found")]
    NotFound,
}

//! File-and-note repository — one flat directory of named byte blobs.
//!
//! Entries whose name ends in `.md` are notes (editable markdown text);
//! everything else is an opaque uploaded file. The filesystem is the
//! database: no index, no sidecar metadata, last write wins.

pub mod entry;
pub mod error;
pub mod store;

pub use entry::{Entry, EntryKind};
pub use error::RepositoryError;
pub use store::FileRepository;

//! Directory-backed storage for entries.
//!
//! Every entry is one regular file in a single flat directory. There is no
//! locking and no cache: concurrent writers to the same name race at the
//! filesystem and the last write wins.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::entry::{self, Entry, NOTE_SUFFIX};
use super::error::RepositoryError;

/// Repository over one upload directory.
///
/// The directory is an explicit constructor argument so that independent
/// instances (e.g. tests over tempdirs) can coexist.
#[derive(Clone, Debug)]
pub struct FileRepository {
    root: PathBuf,
}

impl FileRepository {
    /// Open a repository rooted at `root`, creating the directory if absent.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(RepositoryError::StorageUnavailable)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// List every regular file in the directory, sorted by name ascending.
    ///
    /// Sub-directories are not part of the namespace and are skipped. Sizes
    /// are read fresh from the filesystem on every call.
    pub fn list(&self) -> Result<Vec<Entry>, RepositoryError> {
        let read_dir = fs::read_dir(&self.root).map_err(RepositoryError::StorageUnavailable)?;

        let mut entries = Vec::new();
        for item in read_dir {
            let item = item.map_err(RepositoryError::StorageUnavailable)?;
            let metadata = match item.metadata() {
                Ok(m) => m,
                Err(_) => continue,
            };
            if !metadata.is_file() {
                continue;
            }
            let name = item.file_name().to_string_lossy().to_string();
            entries.push(Entry {
                kind: entry::classify(&name),
                size_bytes: metadata.len(),
                size_label: entry::format_size(metadata.len()),
                name,
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    /// Store `content` under `name`, truncating any existing entry.
    ///
    /// An empty name means the client submitted no file: a silent no-op,
    /// not an error.
    pub fn store(&self, name: &str, content: &[u8]) -> Result<(), RepositoryError> {
        if name.is_empty() {
            return Ok(());
        }
        fs::write(self.entry_path(name), content).map_err(RepositoryError::Write)
    }

    /// Create (or overwrite) a note, returning the stored name.
    ///
    /// The title is normalized to end with `.md`: the suffix is appended
    /// only if absent, so "report" and "report.md" both land on "report.md".
    pub fn create_note(&self, title: &str, text: &str) -> Result<String, RepositoryError> {
        let name = if title.ends_with(NOTE_SUFFIX) {
            title.to_string()
        } else {
            format!("{}{}", title, NOTE_SUFFIX)
        };
        self.store(&name, text.as_bytes())?;
        Ok(name)
    }

    /// Full text of a note-named entry.
    ///
    /// A zero-length file is a valid `Ok("")`; only a missing file is
    /// `NotFound`. An entry that exists but cannot be read as text (a
    /// binary file named `*.md`) is `StorageUnavailable`.
    pub fn read_note(&self, name: &str) -> Result<String, RepositoryError> {
        match fs::read_to_string(self.entry_path(name)) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(RepositoryError::NotFound),
            Err(e) => Err(RepositoryError::StorageUnavailable(e)),
        }
    }

    /// Replace the full content of a note.
    ///
    /// Upsert semantics: the write is unconditional, so updating a missing
    /// name creates it. Callers relying on strict update must check
    /// existence themselves.
    pub fn update_note(&self, name: &str, text: &str) -> Result<(), RepositoryError> {
        fs::write(self.entry_path(name), text).map_err(RepositoryError::Write)
    }

    /// Raw bytes of any entry.
    pub fn read(&self, name: &str) -> Result<Vec<u8>, RepositoryError> {
        match fs::read(self.entry_path(name)) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(RepositoryError::NotFound),
            Err(e) => Err(RepositoryError::StorageUnavailable(e)),
        }
    }

    /// Remove an entry. Deleting a name that does not exist succeeds
    /// silently: the only caller path is "user clicked delete on a listed
    /// entry", where losing the race to another delete is not a failure.
    pub fn delete(&self, name: &str) -> Result<(), RepositoryError> {
        match fs::remove_file(self.entry_path(name)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(RepositoryError::Write(e)),
        }
    }
}

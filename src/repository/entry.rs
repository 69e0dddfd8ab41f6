/// Classification of an entry, derived from its name — never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Name ends with the literal `.md` suffix; content is markdown text.
    Note,
    /// Anything else; content is opaque bytes.
    Generic,
}

/// The markdown suffix that makes an entry a note.
pub const NOTE_SUFFIX: &str = ".md";

/// Classify a name. Pure function of the name, nothing else.
pub fn classify(name: &str) -> EntryKind {
    if name.ends_with(NOTE_SUFFIX) {
        EntryKind::Note
    } else {
        EntryKind::Generic
    }
}

/// One row of a directory listing. Sizes are recomputed on every list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
    pub size_bytes: u64,
    /// Human-readable size, e.g. "1.5 KB".
    pub size_label: String,
}

impl Entry {
    pub fn is_note(&self) -> bool {
        self.kind == EntryKind::Note
    }
}

/// Human-readable file size.
///
/// Divides by 1024 through B/KB/MB/GB; whatever is still >= 1024 after GB
/// is labeled TB with no further escalation. One decimal digit, single
/// space before the unit: 1536 -> "1.5 KB", 0 -> "0.0 B".
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    for unit in ["B", "KB", "MB", "GB"] {
        if size < 1024.0 {
            return format!("{:.1} {}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.1} TB", size)
}

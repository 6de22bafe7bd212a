/// Per-file evaluation types.
///
/// A `FileRecord` lives only while one file is being classified; the
/// classification is what survives, as a `FileOutcome`.
use crate::error::ScanError;
use crate::model::serialize_lossy_path;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Sizes observed for one regular file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    /// Size reported by the metadata query.
    pub stat_size: u64,
    /// Number of bytes actually read from the file.
    pub read_size: u64,
}

impl FileRecord {
    /// The corruption heuristic: the filesystem claims content, none can be read.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.stat_size > 0 && self.read_size == 0
    }

    /// Classify this record. Consumes it; the record is not kept after this.
    pub fn classify(self) -> FileOutcome {
        if self.is_truncated() {
            FileOutcome::Corrupted {
                path: self.path,
                stat_size: self.stat_size,
            }
        } else {
            FileOutcome::Clean {
                path: self.path,
                read_size: self.read_size,
            }
        }
    }
}

/// Why an entry could not be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InaccessibleKind {
    Metadata,
    ContentRead,
    Traversal,
    Unstable,
}

impl InaccessibleKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Metadata => "metadata",
            Self::ContentRead => "content_read",
            Self::Traversal => "traversal",
            Self::Unstable => "unstable",
        }
    }
}

impl fmt::Display for InaccessibleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An entry the scanner could not draw a conclusion about.
///
/// Kept separate from corrupted files: "could not determine" is not
/// "not corrupted".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InaccessibleEntry {
    #[serde(serialize_with = "serialize_lossy_path")]
    pub path: PathBuf,
    pub kind: InaccessibleKind,
    pub message: String,
}

impl From<ScanError> for InaccessibleEntry {
    fn from(err: ScanError) -> Self {
        let (kind, message) = match &err {
            ScanError::Metadata { source, .. } => (InaccessibleKind::Metadata, source.to_string()),
            ScanError::ContentRead { source, .. } => {
                (InaccessibleKind::ContentRead, source.to_string())
            }
            ScanError::Traversal { message, .. } => (InaccessibleKind::Traversal, message.clone()),
            ScanError::Unstable { before, after, .. } => (
                InaccessibleKind::Unstable,
                match after {
                    Some(after) => format!("size changed from {before} to {after} during read"),
                    None => format!("file of size {before} vanished during read"),
                },
            ),
            ScanError::RootUnreachable { reason, .. } => {
                (InaccessibleKind::Traversal, reason.clone())
            }
        };
        Self {
            path: err.path().to_path_buf(),
            kind,
            message,
        }
    }
}

/// Outcome of evaluating one directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Clean { path: PathBuf, read_size: u64 },
    Corrupted { path: PathBuf, stat_size: u64 },
    Inaccessible(InaccessibleEntry),
    /// Not a regular file (directory, symlink, device, FIFO, socket).
    Skipped,
}

/// Aggregated result of one scan.
///
/// Built by folding `FileOutcome`s in walk order. Fields are private and
/// only the scanner can append, so a returned result is immutable to callers.
use crate::model::{serialize_lossy_path, FileOutcome, InaccessibleEntry};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A file flagged by the truncation heuristic. Its read size is always 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorruptedFile {
    #[serde(serialize_with = "serialize_lossy_path")]
    pub path: PathBuf,
    pub stat_size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    #[serde(serialize_with = "serialize_lossy_path")]
    root: PathBuf,
    corrupted: Vec<CorruptedFile>,
    inaccessible: Vec<InaccessibleEntry>,
    /// Regular files fully evaluated (clean + corrupted).
    files_scanned: u64,
    /// Total bytes read across evaluated files.
    bytes_scanned: u64,
    /// Set when the root itself could not be walked.
    root_error: Option<String>,
}

impl ScanResult {
    pub(crate) fn new(root: PathBuf) -> Self {
        Self {
            root,
            corrupted: Vec::new(),
            inaccessible: Vec::new(),
            files_scanned: 0,
            bytes_scanned: 0,
            root_error: None,
        }
    }

    /// An empty result for a root that could not be walked.
    pub(crate) fn unreachable(root: PathBuf, reason: String) -> Self {
        let mut result = Self::new(root);
        result.root_error = Some(reason);
        result
    }

    /// Fold one outcome into the result.
    pub(crate) fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Clean { read_size, .. } => {
                self.files_scanned += 1;
                self.bytes_scanned += read_size;
            }
            FileOutcome::Corrupted { path, stat_size } => {
                self.files_scanned += 1;
                self.corrupted.push(CorruptedFile { path, stat_size });
            }
            FileOutcome::Inaccessible(entry) => self.inaccessible.push(entry),
            FileOutcome::Skipped => {}
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn corrupted(&self) -> &[CorruptedFile] {
        &self.corrupted
    }

    pub fn corrupted_paths(&self) -> impl Iterator<Item = &Path> {
        self.corrupted.iter().map(|c| c.path.as_path())
    }

    pub fn corrupted_count(&self) -> usize {
        self.corrupted.len()
    }

    pub fn inaccessible(&self) -> &[InaccessibleEntry] {
        &self.inaccessible
    }

    pub fn inaccessible_paths(&self) -> impl Iterator<Item = &Path> {
        self.inaccessible.iter().map(|e| e.path.as_path())
    }

    pub fn inaccessible_count(&self) -> usize {
        self.inaccessible.len()
    }

    pub fn files_scanned(&self) -> u64 {
        self.files_scanned
    }

    pub fn bytes_scanned(&self) -> u64 {
        self.bytes_scanned
    }

    pub fn root_error(&self) -> Option<&str> {
        self.root_error.as_deref()
    }

    pub fn root_reachable(&self) -> bool {
        self.root_error.is_none()
    }

    /// `true` when the root was walked and nothing was flagged.
    ///
    /// Inaccessible entries do not make a result unclean, but callers should
    /// look at `inaccessible_count` before reading "clean" as "healthy".
    pub fn is_clean(&self) -> bool {
        self.root_reachable() && self.corrupted.is_empty()
    }
}

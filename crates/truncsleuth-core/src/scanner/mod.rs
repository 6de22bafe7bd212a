/// Scanner module: walks a directory tree and classifies every regular file.
///
/// The walk is single-threaded and synchronous. `jwalk` runs in serial mode
/// with sorted siblings, so two scans of an unmodified tree visit files in
/// the same depth-first order and produce equal `ScanResult`s.
///
/// The scanner never fails as a whole: per-file errors are recorded as
/// inaccessible entries, and an unreachable root yields an empty result with
/// `root_error` set.
pub mod evaluate;
pub mod probe;

use crate::error::ScanError;
use crate::model::{FileOutcome, ScanResult};
use evaluate::evaluate_file;
use probe::{FileProbe, FsProbe};
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Knobs for one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Maximum directory depth below the root. `None` walks everything;
    /// `Some(1)` looks only at the root's direct children.
    pub max_depth: Option<usize>,
    /// Re-query each file's size after reading it and report a mismatch as
    /// unstable instead of classifying it.
    pub recheck_after_read: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_depth: None,
            recheck_after_read: true,
        }
    }
}

impl ScanOptions {
    pub fn max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn recheck_after_read(mut self, enabled: bool) -> Self {
        self.recheck_after_read = enabled;
        self
    }
}

/// A configured scanner. Holds no state between scans.
#[derive(Debug, Clone, Default)]
pub struct Scanner<P = FsProbe> {
    options: ScanOptions,
    probe: P,
}

impl Scanner<FsProbe> {
    pub fn new(options: ScanOptions) -> Self {
        Self {
            options,
            probe: FsProbe,
        }
    }
}

impl<P: FileProbe> Scanner<P> {
    /// Use a custom probe for metadata queries and content reads.
    pub fn with_probe(options: ScanOptions, probe: P) -> Self {
        Self { options, probe }
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Scan `root` and return the folded result.
    pub fn scan(&self, root: impl AsRef<Path>) -> ScanResult {
        let root = root.as_ref();
        let start = Instant::now();
        info!("Starting scan of {}", root.display());

        if let Err(err) = check_root(root) {
            warn!("{err}");
            let reason = match err {
                ScanError::RootUnreachable { reason, .. } => reason,
                other => other.to_string(),
            };
            return ScanResult::unreachable(root.to_path_buf(), reason);
        }

        let mut result = ScanResult::new(root.to_path_buf());

        let mut walker = jwalk::WalkDir::new(root)
            .skip_hidden(false)
            .follow_links(false)
            .sort(true)
            .parallelism(jwalk::Parallelism::Serial);
        if let Some(depth) = self.options.max_depth {
            walker = walker.max_depth(depth);
        }

        for entry_result in walker {
            let mut entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    // Per-entry errors from jwalk itself.
                    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                    result.record(FileOutcome::Inaccessible(
                        ScanError::Traversal {
                            path,
                            message: err.to_string(),
                        }
                        .into(),
                    ));
                    continue;
                }
            };

            // A directory jwalk could not list still arrives as `Ok`; its
            // listing error rides along on the entry.
            if let Some(err) = entry.read_children_error.take() {
                result.record(FileOutcome::Inaccessible(
                    ScanError::Traversal {
                        path: entry.path(),
                        message: err.to_string(),
                    }
                    .into(),
                ));
                continue;
            }

            let path = entry.path();
            let file_type = entry.file_type();
            if file_type.is_file() {
                result.record(evaluate_file(
                    &self.probe,
                    &path,
                    self.options.recheck_after_read,
                ));
            } else if file_type.is_symlink() {
                result.record(self.evaluate_link(&path));
            } else {
                // Directories and special files are never evaluated.
                result.record(FileOutcome::Skipped);
            }
        }

        info!(
            "Scan complete: {} files ({} B) in {:?}; {} corrupted, {} inaccessible",
            result.files_scanned(),
            result.bytes_scanned(),
            start.elapsed(),
            result.corrupted_count(),
            result.inaccessible_count(),
        );
        result
    }
}

impl<P: FileProbe> Scanner<P> {
    /// Links to regular files are evaluated through the link; links to
    /// directories are never followed. A dangling link is inaccessible.
    fn evaluate_link(&self, path: &Path) -> FileOutcome {
        match fs::metadata(path) {
            Ok(meta) if meta.is_file() => {
                evaluate_file(&self.probe, path, self.options.recheck_after_read)
            }
            Ok(_) => FileOutcome::Skipped,
            Err(source) => FileOutcome::Inaccessible(
                ScanError::Metadata {
                    path: path.to_path_buf(),
                    source,
                }
                .into(),
            ),
        }
    }
}

/// Scan `root` with default options and the real filesystem.
pub fn scan(root: impl AsRef<Path>) -> ScanResult {
    Scanner::new(ScanOptions::default()).scan(root)
}

/// The root must be a directory that can be listed.
fn check_root(root: &Path) -> Result<(), ScanError> {
    let unreachable = |reason: String| ScanError::RootUnreachable {
        path: root.to_path_buf(),
        reason,
    };

    let meta = fs::metadata(root).map_err(|e| unreachable(e.to_string()))?;
    if !meta.is_dir() {
        return Err(unreachable("not a directory".to_string()));
    }
    fs::read_dir(root).map_err(|e| unreachable(e.to_string()))?;
    debug!("Root {} is readable", root.display());
    Ok(())
}

/// Per-file evaluation: metadata query, content read, classification.
use crate::error::ScanError;
use crate::model::{FileOutcome, FileRecord};
use crate::scanner::probe::FileProbe;
use std::path::Path;
use tracing::debug;

/// Evaluate one regular file.
///
/// Every failure becomes `FileOutcome::Inaccessible`; nothing here aborts
/// the scan. With `recheck_after_read`, the size is queried again after the
/// read and a disagreement is reported as `Unstable` rather than classified.
pub fn evaluate_file<P: FileProbe>(probe: &P, path: &Path, recheck_after_read: bool) -> FileOutcome {
    let stat_size = match probe.stat_size(path) {
        Ok(size) => size,
        Err(source) => {
            return inaccessible(ScanError::Metadata {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let read_size = match probe.read_size(path) {
        Ok(size) => size,
        Err(source) => {
            return inaccessible(ScanError::ContentRead {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if recheck_after_read {
        let after = probe.stat_size(path).ok();
        if after != Some(stat_size) {
            return inaccessible(ScanError::Unstable {
                path: path.to_path_buf(),
                before: stat_size,
                after,
            });
        }
    }

    let outcome = FileRecord {
        path: path.to_path_buf(),
        stat_size,
        read_size,
    }
    .classify();

    if let FileOutcome::Corrupted { path, stat_size } = &outcome {
        debug!("Truncated: {} (stat {stat_size} B, read 0 B)", path.display());
    }
    outcome
}

fn inaccessible(err: ScanError) -> FileOutcome {
    debug!("Inaccessible: {err}");
    FileOutcome::Inaccessible(err.into())
}

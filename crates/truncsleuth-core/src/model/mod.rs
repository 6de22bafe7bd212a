/// Data model for a truncation scan.
///
/// Re-exports the per-file types and the aggregated result.
pub mod file_record;
pub mod scan_result;

pub use file_record::{FileOutcome, FileRecord, InaccessibleEntry, InaccessibleKind};
pub use scan_result::{CorruptedFile, ScanResult};

use serde::Serializer;
use std::path::Path;

/// Serialize a path as a string, replacing invalid UTF-8 with U+FFFD so a
/// legal but non-UTF-8 file name never aborts a report halfway through.
pub(crate) fn serialize_lossy_path<P, S>(path: &P, serializer: S) -> Result<S::Ok, S::Error>
where
    P: AsRef<Path>,
    S: Serializer,
{
    serializer.serialize_str(&path.as_ref().to_string_lossy())
}

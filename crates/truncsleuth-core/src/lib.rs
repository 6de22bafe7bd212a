/// TruncSleuth Core: truncation scanning, result model, and reports.
///
/// This crate contains all scanning logic with zero terminal or process
/// concerns. The `truncsleuth` binary is a thin frontend over it.
///
/// # Modules
///
/// - [`model`]: Per-file records and outcomes, and the aggregated `ScanResult`.
/// - [`scanner`]: Deterministic depth-first walk that classifies every regular file.
/// - [`report`]: Text, JSON and CSV renderings of a finished scan.
/// - [`error`]: Typed error taxonomy for metadata, content and traversal failures.
pub mod error;
pub mod model;
pub mod report;
pub mod scanner;

pub use error::ScanError;
pub use model::{CorruptedFile, FileOutcome, FileRecord, InaccessibleEntry, InaccessibleKind, ScanResult};
pub use scanner::{scan, ScanOptions, Scanner};

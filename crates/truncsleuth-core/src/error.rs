/// Error taxonomy for a scan.
///
/// None of these are fatal to a scan. Per-entry variants are folded into the
/// result as [`InaccessibleEntry`](crate::model::InaccessibleEntry) values;
/// `RootUnreachable` produces an empty result with `root_error` set.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// Querying the entry's metadata failed.
    #[error("metadata query failed for {}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Opening or reading the entry's content failed.
    #[error("content read failed for {}: {source}", path.display())]
    ContentRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A directory below the root could not be listed.
    #[error("cannot list {}: {message}", path.display())]
    Traversal { path: PathBuf, message: String },

    /// The file changed size (or vanished) while it was being read.
    #[error("{} changed during scan (size {before} before read, {after:?} after)", path.display())]
    Unstable {
        path: PathBuf,
        before: u64,
        after: Option<u64>,
    },

    /// The scan root does not exist, is not a directory, or cannot be listed.
    #[error("root {} is unreachable: {reason}", path.display())]
    RootUnreachable { path: PathBuf, reason: String },
}

impl ScanError {
    /// Path of the entry this error is about.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Metadata { path, .. }
            | Self::ContentRead { path, .. }
            | Self::Traversal { path, .. }
            | Self::Unstable { path, .. }
            | Self::RootUnreachable { path, .. } => path,
        }
    }
}

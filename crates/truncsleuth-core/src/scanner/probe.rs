/// Filesystem access used by the scanner for one file.
///
/// The walk decides *which* entries to look at; a `FileProbe` decides how
/// their size is queried and how their content is read. `FsProbe` is the
/// real implementation; tests substitute probes that simulate truncated or
/// racing files, which cannot be produced reliably on a real filesystem.
use std::fs::{self, File};
use std::io;
use std::path::Path;

pub trait FileProbe {
    /// Size reported by the filesystem, without reading content.
    fn stat_size(&self, path: &Path) -> io::Result<u64>;

    /// Number of bytes that can actually be read from the file.
    fn read_size(&self, path: &Path) -> io::Result<u64>;
}

/// Probe backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl FileProbe for FsProbe {
    fn stat_size(&self, path: &Path) -> io::Result<u64> {
        fs::metadata(path).map(|meta| meta.len())
    }

    fn read_size(&self, path: &Path) -> io::Result<u64> {
        // Streamed into a sink so large files are counted, not buffered.
        // The handle is dropped on every return path.
        let mut file = File::open(path)?;
        io::copy(&mut file, &mut io::sink())
    }
}

impl<P: FileProbe + ?Sized> FileProbe for &P {
    fn stat_size(&self, path: &Path) -> io::Result<u64> {
        (**self).stat_size(path)
    }

    fn read_size(&self, path: &Path) -> io::Result<u64> {
        (**self).read_size(path)
    }
}

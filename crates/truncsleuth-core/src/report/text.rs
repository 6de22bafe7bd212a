/// Line-oriented console report.
///
/// ```text
/// CORRUPTED: data/b.txt (StatSize: 10, ReadSize: 0)
/// INACCESSIBLE: data/locked.bin (content_read: Permission denied (os error 13))
/// Scan complete. Found 1 corrupted files.
/// Skipped 1 inaccessible entries.
/// ```
use crate::model::ScanResult;
use std::io::{self, Write};

pub fn write_text<W: Write>(result: &ScanResult, mut out: W) -> io::Result<()> {
    for file in result.corrupted() {
        writeln!(
            out,
            "CORRUPTED: {} (StatSize: {}, ReadSize: 0)",
            file.path.display(),
            file.stat_size
        )?;
    }
    for entry in result.inaccessible() {
        writeln!(
            out,
            "INACCESSIBLE: {} ({}: {})",
            entry.path.display(),
            entry.kind,
            entry.message
        )?;
    }
    if let Some(reason) = result.root_error() {
        writeln!(out, "ROOT UNREACHABLE: {} ({reason})", result.root().display())?;
    }

    writeln!(
        out,
        "Scan complete. Found {} corrupted files.",
        result.corrupted_count()
    )?;
    if result.inaccessible_count() > 0 {
        writeln!(
            out,
            "Skipped {} inaccessible entries.",
            result.inaccessible_count()
        )?;
    }
    out.flush()
}

/// Machine-readable exports: pretty JSON of the whole result, or one CSV
/// row per corrupted / inaccessible entry.
use crate::model::ScanResult;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
struct JsonReport<'a> {
    scanned_at: DateTime<Utc>,
    corrupted_count: usize,
    inaccessible_count: usize,
    #[serde(flatten)]
    result: &'a ScanResult,
}

pub fn write_json<W: Write>(
    result: &ScanResult,
    scanned_at: DateTime<Utc>,
    mut out: W,
) -> io::Result<()> {
    let report = JsonReport {
        scanned_at,
        corrupted_count: result.corrupted_count(),
        inaccessible_count: result.inaccessible_count(),
        result,
    };
    serde_json::to_writer_pretty(&mut out, &report)?;
    writeln!(out)?;
    out.flush()
}

#[derive(Serialize)]
struct CsvRow<'a> {
    status: &'a str,
    path: String,
    stat_size: Option<u64>,
    detail: String,
}

pub fn write_csv<W: Write>(result: &ScanResult, out: W) -> io::Result<()> {
    // Header written by hand so an empty report still carries it.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);
    writer.write_record(["status", "path", "stat_size", "detail"])?;

    for file in result.corrupted() {
        writer.serialize(CsvRow {
            status: "corrupted",
            path: file.path.to_string_lossy().into_owned(),
            stat_size: Some(file.stat_size),
            detail: "read_size=0".to_string(),
        })?;
    }
    for entry in result.inaccessible() {
        writer.serialize(CsvRow {
            status: "inaccessible",
            path: entry.path.to_string_lossy().into_owned(),
            stat_size: None,
            detail: format!("{}: {}", entry.kind, entry.message),
        })?;
    }
    if let Some(reason) = result.root_error() {
        writer.serialize(CsvRow {
            status: "root_unreachable",
            path: result.root().to_string_lossy().into_owned(),
            stat_size: None,
            detail: reason.to_string(),
        })?;
    }

    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FileOutcome, InaccessibleEntry, InaccessibleKind};
    use chrono::TimeZone;
    use std::path::PathBuf;

    fn sample() -> ScanResult {
        let mut result = ScanResult::new(PathBuf::from("root"));
        result.record(FileOutcome::Clean {
            path: PathBuf::from("root/a.txt"),
            read_size: 10,
        });
        result.record(FileOutcome::Corrupted {
            path: PathBuf::from("root/b.txt"),
            stat_size: 10,
        });
        result.record(FileOutcome::Inaccessible(InaccessibleEntry {
            path: PathBuf::from("root/locked"),
            kind: InaccessibleKind::ContentRead,
            message: "denied".into(),
        }));
        result
    }

    #[test]
    fn test_json_report_fields() {
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let mut buf = Vec::new();
        write_json(&sample(), at, &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["corrupted_count"], 1);
        assert_eq!(value["inaccessible_count"], 1);
        assert_eq!(value["files_scanned"], 2);
        assert_eq!(value["corrupted"][0]["path"], "root/b.txt");
        assert_eq!(value["corrupted"][0]["stat_size"], 10);
        assert_eq!(value["inaccessible"][0]["kind"], "content_read");
        assert!(value["root_error"].is_null());
        assert!(value["scanned_at"].as_str().unwrap().starts_with("2026-01-02T03:04:05"));
    }

    #[test]
    fn test_csv_rows() {
        let mut buf = Vec::new();
        write_csv(&sample(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "status,path,stat_size,detail",
                "corrupted,root/b.txt,10,read_size=0",
                "inaccessible,root/locked,,content_read: denied",
            ]
        );
    }

    #[test]
    fn test_csv_empty_result_keeps_header() {
        let mut buf = Vec::new();
        write_csv(&ScanResult::new(PathBuf::from("root")), &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "status,path,stat_size,detail\n");
    }

    #[cfg(unix)]
    fn non_utf8_result() -> ScanResult {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let root = PathBuf::from(OsStr::from_bytes(b"root\xff"));
        let mut result = ScanResult::new(root.clone());
        result.record(FileOutcome::Corrupted {
            path: root.join(OsStr::from_bytes(b"bad\xff.bin")),
            stat_size: 10,
        });
        result.record(FileOutcome::Inaccessible(InaccessibleEntry {
            path: root.join(OsStr::from_bytes(b"locked\xfe")),
            kind: InaccessibleKind::Traversal,
            message: "denied".into(),
        }));
        result
    }

    #[cfg(unix)]
    #[test]
    fn test_json_survives_non_utf8_paths() {
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let mut buf = Vec::new();
        write_json(&non_utf8_result(), at, &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["root"], "root\u{FFFD}");
        assert_eq!(value["corrupted_count"], 1);
        assert_eq!(value["corrupted"][0]["path"], "root\u{FFFD}/bad\u{FFFD}.bin");
        assert_eq!(value["inaccessible"][0]["path"], "root\u{FFFD}/locked\u{FFFD}");
        assert_eq!(value["inaccessible"][0]["kind"], "traversal");
    }

    #[cfg(unix)]
    #[test]
    fn test_csv_survives_non_utf8_paths() {
        let mut buf = Vec::new();
        write_csv(&non_utf8_result(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("corrupted,root\u{FFFD}/bad\u{FFFD}.bin,10,read_size=0"), "{text}");
    }
}

/// Command-line arguments and the mapping from a scan result to an exit code.
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use truncsleuth_core::report::ReportFormat;
use truncsleuth_core::{ScanOptions, ScanResult};

/// Find truncated files: nonzero reported size, but nothing readable.
///
/// Exit status: 0 when nothing is flagged, 1 when at least one file is
/// corrupted, 2 when the root cannot be walked.
#[derive(Debug, Parser)]
#[command(name = "truncsleuth", version, about)]
pub struct Args {
    /// Directory to scan.
    pub root: PathBuf,

    /// Report format written to stdout.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Maximum directory depth below the root (1 = direct children only).
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Do not re-check file sizes after reading.
    #[arg(long)]
    pub no_recheck: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Csv,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => ReportFormat::Text,
            Format::Json => ReportFormat::Json,
            Format::Csv => ReportFormat::Csv,
        }
    }
}

impl Args {
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions::default()
            .max_depth(self.max_depth)
            .recheck_after_read(!self.no_recheck)
    }

    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    }
}

pub const EXIT_CLEAN: u8 = 0;
pub const EXIT_CORRUPTED: u8 = 1;
pub const EXIT_UNREACHABLE: u8 = 2;

/// Unreachable root wins over findings; inaccessible files alone never
/// change the status.
pub fn exit_status(result: &ScanResult) -> u8 {
    if !result.root_reachable() {
        EXIT_UNREACHABLE
    } else if result.corrupted_count() > 0 {
        EXIT_CORRUPTED
    } else {
        EXIT_CLEAN
    }
}

pub fn exit_code(result: &ScanResult) -> ExitCode {
    ExitCode::from(exit_status(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::Path;
    use truncsleuth_core::scanner::probe::{FileProbe, FsProbe};
    use truncsleuth_core::Scanner;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["truncsleuth", "data"]).unwrap();
        assert_eq!(args.root, PathBuf::from("data"));
        assert_eq!(args.format, Format::Text);
        assert_eq!(args.scan_options(), ScanOptions::default());
        assert_eq!(args.log_level(), tracing::Level::WARN);
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "truncsleuth",
            "data",
            "--format",
            "csv",
            "--max-depth",
            "3",
            "--no-recheck",
            "-vv",
        ])
        .unwrap();
        assert_eq!(ReportFormat::from(args.format), ReportFormat::Csv);
        assert_eq!(args.scan_options().max_depth, Some(3));
        assert!(!args.scan_options().recheck_after_read);
        assert_eq!(args.log_level(), tracing::Level::DEBUG);
    }

    /// Reports every file as unreadable-but-sized, i.e. truncated.
    struct AlwaysEmpty;

    impl FileProbe for AlwaysEmpty {
        fn stat_size(&self, path: &Path) -> io::Result<u64> {
            FsProbe.stat_size(path)
        }

        fn read_size(&self, _path: &Path) -> io::Result<u64> {
            Ok(0)
        }
    }

    #[test]
    fn test_exit_status() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join("a.txt"), b"hello").unwrap();

        let clean = Scanner::new(ScanOptions::default()).scan(tmp.path());
        assert_eq!(exit_status(&clean), EXIT_CLEAN);

        let corrupted = Scanner::with_probe(ScanOptions::default(), AlwaysEmpty).scan(tmp.path());
        assert_eq!(exit_status(&corrupted), EXIT_CORRUPTED);

        let missing = Scanner::new(ScanOptions::default()).scan(tmp.path().join("missing"));
        assert_eq!(exit_status(&missing), EXIT_UNREACHABLE);
    }

    #[test]
    fn test_root_is_required() {
        assert!(Args::try_parse_from(["truncsleuth"]).is_err());
    }
}

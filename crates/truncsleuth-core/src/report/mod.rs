/// Reports: renderings of a finished `ScanResult`.
///
/// - [`text`]: the line-oriented console format.
/// - [`export`]: JSON and CSV for machine consumption.
pub mod export;
pub mod text;

use crate::model::ScanResult;
use std::io::{self, Write};

/// Output format for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Write `result` to `out` in the requested format.
pub fn render<W: Write>(result: &ScanResult, format: ReportFormat, out: W) -> io::Result<()> {
    match format {
        ReportFormat::Text => text::write_text(result, out),
        ReportFormat::Json => export::write_json(result, chrono::Utc::now(), out),
        ReportFormat::Csv => export::write_csv(result, out),
    }
}

//! Export blobs for the share/save collaborator: CSV text, PDF bytes,
//! suggested file names, and saving into the exports directory.

pub mod csv;

pub use self::csv::to_csv;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::dates;
use crate::trends::Period;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid export file name: {0}")]
    InvalidFilename(String),
}

/// What a blob contains; drives the suggested file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Csv,
    EntryReport,
    SummaryReport(Period),
    DetailedReport,
}

impl ExportKind {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            _ => "pdf",
        }
    }
}

/// File name offered to the share sheet, stamped with the local date.
pub fn suggested_filename(kind: ExportKind, now: DateTime<Utc>) -> String {
    let stem = match kind {
        ExportKind::Csv => "symptom-journal".to_string(),
        ExportKind::EntryReport => "symptom-entry".to_string(),
        ExportKind::SummaryReport(period) => {
            format!("symptom-summary-{}", period.label().to_lowercase())
        }
        ExportKind::DetailedReport => "symptom-report-detailed".to_string(),
    };
    format!("{stem}-{}.{}", dates::file_stamp(now), kind.extension())
}

/// Saves export bytes under `exports_dir`, creating it when missing.
/// `filename` must be a bare file name.
pub fn write_export(
    bytes: &[u8],
    filename: &str,
    exports_dir: &Path,
) -> Result<PathBuf, ExportError> {
    let is_bare = Path::new(filename)
        .file_name()
        .is_some_and(|name| name == filename);
    if !is_bare || filename.contains('\\') {
        return Err(ExportError::InvalidFilename(filename.to_string()));
    }

    std::fs::create_dir_all(exports_dir)?;
    let path = exports_dir.join(filename);
    std::fs::write(&path, bytes)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "Export saved");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn midday() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap()
    }

    #[test]
    fn suggested_names_carry_kind_and_date() {
        assert_eq!(suggested_filename(ExportKind::Csv, midday()), "symptom-journal-2026-01-05.csv");
        assert_eq!(
            suggested_filename(ExportKind::SummaryReport(Period::Month), midday()),
            "symptom-summary-monthly-2026-01-05.pdf"
        );
        assert_eq!(
            suggested_filename(ExportKind::DetailedReport, midday()),
            "symptom-report-detailed-2026-01-05.pdf"
        );
        assert!(suggested_filename(ExportKind::EntryReport, midday()).ends_with(".pdf"));
    }

    #[test]
    fn write_export_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let exports = dir.path().join("exports");
        let path = write_export(b"Date\n", "journal.csv", &exports).unwrap();
        assert_eq!(path, exports.join("journal.csv"));
        assert_eq!(std::fs::read(path).unwrap(), b"Date\n".to_vec());
    }

    #[test]
    fn write_export_rejects_paths() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["../escape.csv", "nested/file.pdf", "", "..", "a\\b.pdf"] {
            let result = write_export(b"x", name, dir.path());
            assert!(matches!(result, Err(ExportError::InvalidFilename(_))), "{name}");
        }
    }
}

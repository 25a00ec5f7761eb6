//! JSON persistence for the analysis document.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::AnalysisResult;

/// Errors that can occur while reading or writing documents.
#[derive(Error, Debug)]
pub enum ReportError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes the document as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization or the underlying writer fails.
pub fn write_document<W: Write>(result: &AnalysisResult, mut writer: W) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(&mut writer, result)?;
    writeln!(writer)?;
    Ok(())
}

/// Writes the document to a file, creating or truncating it.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_document_file(result: &AnalysisResult, path: &Path) -> Result<(), ReportError> {
    let file = File::create(path)?;
    write_document(result, BufWriter::new(file))
}

/// Reads a previously written document back from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or does not parse.
pub fn read_document(path: &Path) -> Result<AnalysisResult, ReportError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Default output filename: `<prefix>_<YYYYMMDD_HHMMSS>.json`.
#[must_use]
pub fn default_output_path(prefix: &str, now: NaiveDateTime) -> PathBuf {
    PathBuf::from(format!("{prefix}_{}.json", now.format("%Y%m%d_%H%M%S")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TableResult;
    use chrono::NaiveDate;

    #[test]
    fn test_file_round_trip() {
        let mut result = AnalysisResult::new();
        result.tables.insert("hollow".to_string(), TableResult::empty());
        result.skip("sessions", "datetime/timestamp column present");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("estimate.json");
        write_document_file(&result, &path).unwrap();

        let back = read_document(&path).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_write_is_pretty_with_trailing_newline() {
        let mut out = Vec::new();
        write_document(&AnalysisResult::new(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_default_output_path() {
        let now = NaiveDate::from_ymd_opt(2025, 6, 20)
            .unwrap()
            .and_hms_opt(16, 17, 44)
            .unwrap();
        assert_eq!(
            default_output_path("db_no_datetime_estimate", now),
            PathBuf::from("db_no_datetime_estimate_20250620_161744.json")
        );
    }
}

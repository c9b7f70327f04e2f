//! Append-Only CSV Export
//!
//! Appends one data row per call to the ledger file, writing the fixed
//! header only when the target does not exist yet or is zero-length. That
//! makes the exporter safe to call repeatedly against the same file across
//! many process runs without duplicating headers or clobbering prior rows.
//!
//! Appends are not transactional, and concurrent writers to the same path
//! from multiple processes are not coordinated; callers wanting a shared
//! ledger must serialize exports themselves.

use crate::record::{CSV_HEADER, CsvRecord};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors surfaced while appending to the ledger.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Filesystem failure: directory creation, open, or write.
    #[error("ledger I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// Row encoding failure from the CSV writer.
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Writer handle for one ledger path.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    /// Create an exporter targeting `path`. Nothing is touched on disk
    /// until the first [`export`](CsvExporter::export).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The ledger path this exporter appends to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `record` as one row, creating missing parent directories and
    /// writing the header iff the file is absent or empty.
    ///
    /// Fields containing a comma, double quote, or line break are wrapped
    /// in double quotes with internal quotes doubled; everything else is
    /// written bare.
    pub fn export(&self, record: &CsvRecord) -> Result<(), ExportError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let needs_header = match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if needs_header {
            writer.write_record(CSV_HEADER)?;
        }
        writer.write_record(record.to_fields())?;
        writer.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use votebench_core::TrackerSnapshot;

    fn record(algorithm: &str) -> CsvRecord {
        CsvRecord::new(
            algorithm,
            8,
            &TrackerSnapshot {
                comparisons: 16,
                swaps: 0,
                array_accesses: 8,
                elapsed_ms: 1.25,
                memory_delta_bytes: 0,
            },
        )
    }

    #[test]
    fn test_fresh_path_gets_header_then_rows_in_call_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.csv");
        let exporter = CsvExporter::new(&path);

        exporter.export(&record("first")).unwrap();
        exporter.export(&record("second")).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER.join(","));
        assert!(lines[1].starts_with("first,8,16,0,8,1.250,0,"));
        assert!(lines[2].starts_with("second,"));
    }

    #[test]
    fn test_header_not_duplicated_across_exporter_instances() {
        // Two exporters against one path simulate two process runs.
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.csv");

        CsvExporter::new(&path).export(&record("run-1")).unwrap();
        CsvExporter::new(&path).export(&record("run-2")).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let headers = contents
            .lines()
            .filter(|line| *line == CSV_HEADER.join(","))
            .count();
        assert_eq!(headers, 1);
        assert_eq!(contents.lines().count(), 3);
    }

    #[test]
    fn test_zero_length_existing_file_still_gets_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.csv");
        fs::write(&path, "").unwrap();

        CsvExporter::new(&path).export(&record("only")).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with(&CSV_HEADER.join(",")));
    }

    #[test]
    fn test_parent_directories_are_created() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("docs").join("plots").join("ledger.csv");

        CsvExporter::new(&path).export(&record("nested")).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_fields_with_commas_are_quoted_and_quotes_doubled() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.csv");

        CsvExporter::new(&path)
            .export(&record("vote,\"fast\""))
            .unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let row = contents.lines().nth(1).unwrap();
        assert!(row.starts_with("\"vote,\"\"fast\"\"\","), "row: {}", row);
    }

    #[test]
    fn test_rows_round_trip_with_eight_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.csv");
        let exporter = CsvExporter::new(&path);
        exporter.export(&record("a,b")).unwrap();
        exporter.export(&record("plain")).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(reader.headers().unwrap().len(), 8);
        let mut rows = 0;
        for row in reader.records() {
            let row = row.unwrap();
            assert_eq!(row.len(), 8);
            rows += 1;
        }
        assert_eq!(rows, 2);
    }

    #[test]
    fn test_unwritable_path_propagates_io_error() {
        // The ledger path collides with an existing directory.
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.csv");
        fs::create_dir(&path).unwrap();

        let err = CsvExporter::new(&path).export(&record("x")).unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
    }
}

#![warn(missing_docs)]
//! VoteBench Report - Results Persistence
//!
//! Turns tracker snapshots into rows of an append-only CSV ledger that is
//! safe to write across many process runs (header exactly once, prior data
//! never rewritten), plus a JSON rendering for machine consumers.

mod exporter;
mod record;

pub use exporter::{CsvExporter, ExportError};
pub use record::{CSV_HEADER, CsvRecord};

/// Render a record as a single JSON object (machine-readable alternative
/// to the CSV ledger; field names match the CSV header).
pub fn record_to_json(record: &CsvRecord) -> Result<String, serde_json::Error> {
    serde_json::to_string(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use votebench_core::TrackerSnapshot;

    #[test]
    fn test_json_field_names_match_csv_header() {
        let snapshot = TrackerSnapshot {
            comparisons: 4,
            swaps: 0,
            array_accesses: 2,
            elapsed_ms: 0.5,
            memory_delta_bytes: -64,
        };
        let record = CsvRecord::new("MajorityVote-random", 2, &snapshot);
        let json = record_to_json(&record).unwrap();

        for column in CSV_HEADER {
            assert!(json.contains(&format!("\"{}\"", column)), "missing {}", column);
        }
    }
}

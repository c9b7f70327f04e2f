//! CSV Record
//!
//! One exported row = one tracker snapshot plus caller-supplied run
//! metadata. Records are created at export time and never mutated
//! afterward; the ledger they land in is append-only.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use votebench_core::TrackerSnapshot;

/// Fixed header row of the ledger. Column order is the stable on-disk
/// schema; consumers compare runs across processes against it.
pub const CSV_HEADER: [&str; 8] = [
    "algorithm",
    "inputSize",
    "comparisons",
    "swaps",
    "arrayAccesses",
    "timeMs",
    "memoryDeltaBytes",
    "timestamp",
];

/// One row of the results ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvRecord {
    /// Algorithm label, e.g. `MajorityVote-random`.
    pub algorithm: String,
    /// Length of the measured input sequence.
    pub input_size: u64,
    /// Comparison count from the snapshot.
    pub comparisons: u64,
    /// Swap count from the snapshot.
    pub swaps: u64,
    /// Element-access count from the snapshot.
    pub array_accesses: u64,
    /// Elapsed time in fractional milliseconds.
    pub time_ms: f64,
    /// Live-heap delta in bytes; negative when the window freed more than
    /// it allocated.
    pub memory_delta_bytes: i64,
    /// Export-time instant, not measurement time.
    pub timestamp: DateTime<Utc>,
}

impl CsvRecord {
    /// Build a record from a snapshot, stamping the current UTC instant.
    pub fn new(algorithm: impl Into<String>, input_size: u64, snapshot: &TrackerSnapshot) -> Self {
        Self {
            algorithm: algorithm.into(),
            input_size,
            comparisons: snapshot.comparisons,
            swaps: snapshot.swaps,
            array_accesses: snapshot.array_accesses,
            time_ms: snapshot.elapsed_ms,
            memory_delta_bytes: snapshot.memory_delta_bytes,
            timestamp: Utc::now(),
        }
    }

    /// Render the record as CSV fields in header order. `timeMs` always
    /// carries exactly three decimal places with a `.` separator,
    /// independent of locale.
    pub(crate) fn to_fields(&self) -> [String; 8] {
        [
            self.algorithm.clone(),
            self.input_size.to_string(),
            self.comparisons.to_string(),
            self.swaps.to_string(),
            self.array_accesses.to_string(),
            format!("{:.3}", self.time_ms),
            self.memory_delta_bytes.to_string(),
            self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
        ]
    }
}

#![warn(missing_docs)]
//! # VoteBench
//!
//! Majority-vote measurement pipeline:
//! - **Boyer-Moore vote**: single pass, O(1) auxiliary space, with a
//!   documented weak guarantee when no strict majority exists
//! - **`PerfTracker`**: thread-safe counters, monotonic timer, live-heap
//!   delta sampling via a tracking global allocator
//! - **CSV ledger**: append-only, header written exactly once per file,
//!   stable cross-run schema
//! - **Synthetic inputs**: random-with-guaranteed-majority, sorted,
//!   reverse-sorted, nearly-sorted
//!
//! ## Quick Start
//!
//! ```
//! use votebench::prelude::*;
//!
//! let input = generate(1_000, Distribution::Random);
//! let tracker = PerfTracker::new();
//! let candidate = find_majority_element(&input, Some(&tracker)).unwrap();
//! assert_eq!(candidate, 1);
//! assert_eq!(tracker.array_accesses(), 1_000);
//! ```

pub use votebench_core::{
    Distribution, PerfTracker, TrackerSnapshot, TrackingAllocator, VoteError,
    find_majority_element, generate, generate_with_rng, live_heap_bytes,
};
pub use votebench_report::{CSV_HEADER, CsvExporter, CsvRecord, ExportError, record_to_json};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        CsvExporter, CsvRecord, Distribution, PerfTracker, find_majority_element, generate,
        generate_with_rng,
    };
}

/// Run the VoteBench CLI driver.
///
/// Call this from your driver binary's `main()`:
/// ```ignore
/// fn main() -> anyhow::Result<()> {
///     votebench::run()
/// }
/// ```
pub use votebench_cli::run;

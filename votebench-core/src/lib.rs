#![warn(missing_docs)]
//! VoteBench Core - Measurement Runtime
//!
//! This crate provides the measured algorithm and the instrumentation it
//! reports to:
//! - Boyer-Moore majority vote (single pass, constant auxiliary space)
//! - `PerfTracker` for operation counts, elapsed time, and heap delta
//! - Global allocator interceptor for live-heap sampling
//! - Synthetic input generation under four named distributions

mod allocator;
mod majority;
mod synthetic;
mod tracker;

pub use allocator::{TrackingAllocator, live_heap_bytes};
pub use majority::{VoteError, find_majority_element};
pub use synthetic::{Distribution, generate, generate_with_rng};
pub use tracker::{PerfTracker, TrackerSnapshot};

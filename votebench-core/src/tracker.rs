//! Performance Tracker
//!
//! Mutable counter bundle plus timer and heap sampler, shared between the
//! algorithm (producer) and reporting code (reader). Every accessor and
//! mutator serializes on the internal lock, so a single tracker instance
//! can be polled from another thread while a measurement is in flight.
//!
//! Misordered use (stop before start, double start) is deliberately not an
//! error: it yields zero or now-based readings so the hot measurement path
//! stays panic-free.

use crate::allocator::live_heap_bytes;
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

#[derive(Debug, Default)]
struct TrackerState {
    comparisons: u64,
    swaps: u64,
    array_accesses: u64,
    started_at: Option<Instant>,
    stopped_at: Option<Instant>,
    start_heap_bytes: Option<i64>,
    end_heap_bytes: Option<i64>,
}

impl TrackerState {
    fn elapsed_ms(&self) -> f64 {
        let Some(started_at) = self.started_at else {
            return 0.0;
        };
        let elapsed = match self.stopped_at {
            Some(stopped_at) => stopped_at.saturating_duration_since(started_at),
            None => started_at.elapsed(),
        };
        elapsed.as_secs_f64() * 1_000.0
    }

    fn memory_delta_bytes(&self) -> i64 {
        let Some(start) = self.start_heap_bytes else {
            return 0;
        };
        let end = self.end_heap_bytes.unwrap_or_else(live_heap_bytes);
        end - start
    }
}

/// Thread-safe accumulator for one measurement cycle.
///
/// Lifecycle: constructed zeroed, [`start`](PerfTracker::start) once,
/// counters incremented while the algorithm runs,
/// [`stop`](PerfTracker::stop) once, read accessors consumed, and
/// optionally [`reset`](PerfTracker::reset) for reuse across repeated runs.
#[derive(Debug, Default)]
pub struct PerfTracker {
    state: Mutex<TrackerState>,
}

/// Point-in-time view of a tracker, read under a single lock acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackerSnapshot {
    /// Comparison operations recorded.
    pub comparisons: u64,
    /// Swap operations recorded.
    pub swaps: u64,
    /// Element accesses recorded.
    pub array_accesses: u64,
    /// Elapsed wall-clock time in fractional milliseconds.
    pub elapsed_ms: f64,
    /// Net live-heap change between the start and stop samples. Negative
    /// when more bytes were freed than allocated inside the window.
    pub memory_delta_bytes: i64,
}

impl PerfTracker {
    /// Create a tracker in the zeroed state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a measurement cycle: sample live heap bytes, then the
    /// monotonic clock. Calling twice overwrites the baseline and clears
    /// any end marks from a previous cycle.
    pub fn start(&self) {
        let mut state = self.lock();
        // Heap before clock, so the baseline sample does not sit inside
        // the timed window.
        state.start_heap_bytes = Some(live_heap_bytes());
        state.started_at = Some(Instant::now());
        state.stopped_at = None;
        state.end_heap_bytes = None;
    }

    /// End the measurement cycle: sample the clock, then live heap bytes.
    pub fn stop(&self) {
        let mut state = self.lock();
        state.stopped_at = Some(Instant::now());
        state.end_heap_bytes = Some(live_heap_bytes());
    }

    /// Record a single comparison.
    pub fn increment_comparisons(&self) {
        self.lock().comparisons += 1;
    }

    /// Add `n` comparisons. Zero or negative deltas are ignored; the
    /// counter never decreases outside of `reset`.
    pub fn add_comparisons(&self, n: i64) {
        if n > 0 {
            self.lock().comparisons += n as u64;
        }
    }

    /// Record a single swap.
    pub fn increment_swaps(&self) {
        self.lock().swaps += 1;
    }

    /// Add `n` swaps. Zero or negative deltas are ignored.
    pub fn add_swaps(&self, n: i64) {
        if n > 0 {
            self.lock().swaps += n as u64;
        }
    }

    /// Record a single element access.
    pub fn increment_array_accesses(&self) {
        self.lock().array_accesses += 1;
    }

    /// Add `n` element accesses. Zero or negative deltas are ignored.
    pub fn add_array_accesses(&self, n: i64) {
        if n > 0 {
            self.lock().array_accesses += n as u64;
        }
    }

    /// Comparisons recorded so far.
    pub fn comparisons(&self) -> u64 {
        self.lock().comparisons
    }

    /// Swaps recorded so far.
    pub fn swaps(&self) -> u64 {
        self.lock().swaps
    }

    /// Element accesses recorded so far.
    pub fn array_accesses(&self) -> u64 {
        self.lock().array_accesses
    }

    /// Elapsed time in fractional milliseconds.
    ///
    /// Zero before any `start`. Mid-flight (started but not stopped) the
    /// reading is now-based and keeps growing until `stop`.
    pub fn elapsed_ms(&self) -> f64 {
        self.lock().elapsed_ms()
    }

    /// Live-heap delta in bytes between the start sample and the stop
    /// sample (or a fresh sample mid-flight). Zero before any `start`.
    pub fn memory_delta_bytes(&self) -> i64 {
        self.lock().memory_delta_bytes()
    }

    /// Return the tracker to its constructed state: all counters and
    /// timing/memory marks zeroed.
    pub fn reset(&self) {
        *self.lock() = TrackerState::default();
    }

    /// Consistent view of all fields under one lock acquisition.
    pub fn snapshot(&self) -> TrackerSnapshot {
        let state = self.lock();
        TrackerSnapshot {
            comparisons: state.comparisons,
            swaps: state.swaps,
            array_accesses: state.array_accesses,
            elapsed_ms: state.elapsed_ms(),
            memory_delta_bytes: state.memory_delta_bytes(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, TrackerState> {
        // A poisoned lock only means a panic elsewhere mid-update; the
        // counters themselves are still valid u64 values.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

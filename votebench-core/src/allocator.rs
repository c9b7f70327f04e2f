//! Global Allocator Interceptor
//!
//! Counts every allocation and deallocation routed through the global
//! allocator so `PerfTracker` can sample live heap bytes before and after a
//! measurement. Net live bytes stand in for the "used = total - free"
//! reading a garbage-collected runtime would expose.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicU64, Ordering};

static ALLOCATED: AtomicU64 = AtomicU64::new(0);
static FREED: AtomicU64 = AtomicU64::new(0);

/// Drop-in global allocator that forwards to `System` while counting bytes.
///
/// Install it in the binary that wants heap-delta measurements:
///
/// ```ignore
/// #[global_allocator]
/// static GLOBAL: TrackingAllocator = TrackingAllocator;
/// ```
///
/// Binaries that skip installation still work; every heap sample then
/// reads zero and memory deltas degenerate to zero.
pub struct TrackingAllocator;

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            ALLOCATED.fetch_add(layout.size() as u64, Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        FREED.fetch_add(layout.size() as u64, Ordering::Relaxed);
        System.dealloc(ptr, layout);
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = System.realloc(ptr, layout, new_size);
        if !new_ptr.is_null() {
            ALLOCATED.fetch_add(new_size as u64, Ordering::Relaxed);
            FREED.fetch_add(layout.size() as u64, Ordering::Relaxed);
        }
        new_ptr
    }
}

/// Net live heap bytes allocated through the interceptor.
///
/// Approximate by contract: the counters attribute bytes to whatever ran
/// since process start, not to one specific computation, and other threads
/// may allocate between two samples.
pub fn live_heap_bytes() -> i64 {
    let allocated = ALLOCATED.load(Ordering::Relaxed);
    let freed = FREED.load(Ordering::Relaxed);
    allocated.saturating_sub(freed) as i64
}

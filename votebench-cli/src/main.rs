//! VoteBench driver binary.

use votebench_core::TrackingAllocator;

// Heap deltas in the ledger come from this interceptor; without it every
// memoryDeltaBytes sample reads zero.
#[global_allocator]
static GLOBAL: TrackingAllocator = TrackingAllocator;

fn main() -> anyhow::Result<()> {
    votebench_cli::run()
}

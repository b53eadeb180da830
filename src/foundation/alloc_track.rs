//! Heap usage sampling for telemetry.
//!
//! With the `alloc-track` feature the crate installs an instrumented global allocator and reports
//! live heap bytes. Without it every sample reads as zero, which telemetry treats as "unavailable".

#[cfg(feature = "alloc-track")]
mod imp {
    use stats_alloc::{INSTRUMENTED_SYSTEM, StatsAlloc};
    use std::alloc::System;

    #[global_allocator]
    static GLOBAL: &StatsAlloc<System> = &INSTRUMENTED_SYSTEM;

    pub(crate) fn live_heap_bytes() -> u64 {
        let s = GLOBAL.stats();
        let allocated = s.bytes_allocated as i128 + s.bytes_reallocated as i128;
        let live = allocated - s.bytes_deallocated as i128;
        u64::try_from(live.max(0)).unwrap_or(u64::MAX)
    }

    pub(crate) const AVAILABLE: bool = true;
}

#[cfg(not(feature = "alloc-track"))]
mod imp {
    pub(crate) fn live_heap_bytes() -> u64 {
        0
    }

    pub(crate) const AVAILABLE: bool = false;
}

pub(crate) use imp::{AVAILABLE, live_heap_bytes};

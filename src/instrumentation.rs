// Lightweight instrumentation for counting hotspots in development.
// Uses thread-local Cells to avoid locking overhead in the scan/mark hot
// loop; reset and snapshot helpers let the profiling binaries collect a
// breakdown per `match_strings` call.
use std::cell::Cell;

thread_local! {
    static LOOKUPS: Cell<u64> = Cell::new(0);
    static SUM_CANDIDATES: Cell<u64> = Cell::new(0);
    static MAX_CANDIDATES: Cell<u64> = Cell::new(0);
    static ESCALATIONS: Cell<u64> = Cell::new(0);
    static VERIFICATION_FAILURES: Cell<u64> = Cell::new(0);
    static TILES_COMMITTED: Cell<u64> = Cell::new(0);
    static TILED_BYTES: Cell<u64> = Cell::new(0);
    static PLATEAU_HITS: Cell<u64> = Cell::new(0);
    static SCAN_PASSES: Cell<u64> = Cell::new(0);
}

pub fn reset_counters() {
    LOOKUPS.with(|c| c.set(0));
    SUM_CANDIDATES.with(|c| c.set(0));
    MAX_CANDIDATES.with(|c| c.set(0));
    ESCALATIONS.with(|c| c.set(0));
    VERIFICATION_FAILURES.with(|c| c.set(0));
    TILES_COMMITTED.with(|c| c.set(0));
    TILED_BYTES.with(|c| c.set(0));
    PLATEAU_HITS.with(|c| c.set(0));
    SCAN_PASSES.with(|c| c.set(0));
}

/// `(scan_passes, escalations, verification_failures, tiles_committed, tiled_bytes, plateau_hits)`.
pub fn counters_snapshot() -> (u64, u64, u64, u64, u64, u64) {
    (
        SCAN_PASSES.with(|c| c.get()),
        ESCALATIONS.with(|c| c.get()),
        VERIFICATION_FAILURES.with(|c| c.get()),
        TILES_COMMITTED.with(|c| c.get()),
        TILED_BYTES.with(|c| c.get()),
        PLATEAU_HITS.with(|c| c.get()),
    )
}

/// `(num_lookups, sum_candidates, max_candidates)` — bucket fan-out stats
/// for the scan phase's hash index lookups.
pub fn lookup_stats_snapshot() -> (u64, u64, u64) {
    (
        LOOKUPS.with(|c| c.get()),
        SUM_CANDIDATES.with(|c| c.get()),
        MAX_CANDIDATES.with(|c| c.get()),
    )
}

pub fn add_scan_pass() {
    SCAN_PASSES.with(|c| c.set(c.get().wrapping_add(1)));
}

pub fn add_lookup_candidates(n_candidates: usize) {
    let n = n_candidates as u64;
    LOOKUPS.with(|c| c.set(c.get().wrapping_add(1)));
    SUM_CANDIDATES.with(|c| c.set(c.get().wrapping_add(n)));
    MAX_CANDIDATES.with(|c| c.set(c.get().max(n)));
}

pub fn add_escalation() {
    ESCALATIONS.with(|c| c.set(c.get().wrapping_add(1)));
}

pub fn add_verification_failure() {
    VERIFICATION_FAILURES.with(|c| c.set(c.get().wrapping_add(1)));
}

pub fn add_tile(length: usize) {
    TILES_COMMITTED.with(|c| c.set(c.get().wrapping_add(1)));
    TILED_BYTES.with(|c| c.set(c.get().wrapping_add(length as u64)));
}

pub fn add_plateau_hit() {
    PLATEAU_HITS.with(|c| c.set(c.get().wrapping_add(1)));
}

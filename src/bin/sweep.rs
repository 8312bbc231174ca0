use rkr_gst::fixture::embed_pattern;
use std::time::Instant;

fn run_case(init_search_length: usize, text_len: usize, pattern_len: usize) {
    let (text, pattern, _offset, _len) = embed_pattern(42, text_len, pattern_len);

    rkr_gst::instrumentation::reset_counters();
    let t0 = Instant::now();
    let tiles = rkr_gst::match_strings(&pattern, &text, init_search_length, b"", b"");
    let dur = t0.elapsed();

    let (scan_passes, escalations, verify_fails, tiles_committed, tiled_bytes, plateau_hits) =
        rkr_gst::instrumentation::counters_snapshot();
    let (lookups, sum, max) = rkr_gst::instrumentation::lookup_stats_snapshot();

    println!(
        "L0={} text_len={} pattern_len={} build_time={:?} tiles={} scan_passes={} \
         escalations={} verify_fails={} tiles_committed={} tiled_bytes={} plateau_hits={} \
         lookups={} mean_cand={} max_cand={}",
        init_search_length,
        text_len,
        pattern_len,
        dur,
        tiles.len(),
        scan_passes,
        escalations,
        verify_fails,
        tiles_committed,
        tiled_bytes,
        plateau_hits,
        lookups,
        if lookups > 0 { sum / lookups } else { 0 },
        max
    );
}

fn main() {
    let thresholds = [2usize, 4, 8, 16, 32];
    let sizes = [(4_000usize, 500usize), (20_000, 2_000)];
    for &l0 in &thresholds {
        for &(text_len, pattern_len) in &sizes {
            run_case(l0, text_len, pattern_len);
        }
    }
}

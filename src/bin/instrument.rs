use rkr_gst::fixture::embed_pattern;
use std::time::Instant;

fn run_case(pattern: &[u8], text: &[u8], init_search_length: usize) {
    rkr_gst::instrumentation::reset_counters();
    let t = Instant::now();
    let tiles = rkr_gst::match_strings(pattern, text, init_search_length, b"", b"");
    let dur = t.elapsed();

    let (scan_passes, escalations, verify_fails, tiles_committed, tiled_bytes, plateau_hits) =
        rkr_gst::instrumentation::counters_snapshot();
    let (lookups, sum_candidates, max_candidates) = rkr_gst::instrumentation::lookup_stats_snapshot();

    println!(
        "match_strings: build_time={:?} tiles_returned={} scan_passes={} escalations={} \
         verify_fails={} tiles_committed={} tiled_bytes={} plateau_hits={}",
        dur,
        tiles.len(),
        scan_passes,
        escalations,
        verify_fails,
        tiles_committed,
        tiled_bytes,
        plateau_hits
    );
    println!(
        "match_strings: lookups={} mean_candidates={} max_candidates={}",
        lookups,
        if lookups > 0 { sum_candidates / lookups } else { 0 },
        max_candidates
    );
}

fn main() {
    let (text, pattern, offset, len) = embed_pattern(42, 20_000, 500);
    println!("generated pattern of {len} bytes embedded at text offset {offset}");
    run_case(&pattern, &text, 4);
}

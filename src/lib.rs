#![allow(unsafe_op_in_unsafe_fn)]

//! Running Karp-Rabin Greedy String Tiling (RKR-GST).
//!
//! Computes a maximal non-overlapping substring tiling between a
//! `pattern` and a `text`: a set of [`Tile`]s identifying equal
//! substrings such that no tile overlaps another tile (in either input),
//! every tile is at least `init_search_length` bytes long, and the
//! algorithm greedily favors the longest matches available at each pass.
//!
//! See [`match_strings`] for the entry point.

pub mod core;
pub mod fixture;
pub mod hash;
pub mod instrumentation;
pub mod mark;
pub mod scan;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use core::{MarkBuffer, MatchConfig, Tile};

/// Drives the scan/mark loop for one `match_strings` call.
struct Controller<'a> {
    pattern: &'a [u8],
    text: &'a [u8],
    pattern_marks: MarkBuffer,
    text_marks: MarkBuffer,
    tiles: Vec<Tile>,
}

impl<'a> Controller<'a> {
    fn run(mut self, init_search_length: usize) -> Vec<Tile> {
        let mut search_length = init_search_length;
        let mut tiled = 0usize;
        let mut prev_tiled;
        let mut plateau = 0u32;

        while search_length > 0 && search_length >= init_search_length {
            let result = scan::scan(
                self.pattern,
                self.text,
                &self.pattern_marks,
                &self.text_marks,
                search_length,
            );

            if result.maxmatch > 2 * search_length {
                // A single very long match would otherwise fragment into
                // many short sub-tiles on this pass; restart at a window
                // large enough to capture it whole.
                search_length = result.maxmatch;
                continue;
            }

            prev_tiled = tiled;
            tiled += mark::mark(
                self.pattern,
                self.text,
                result.candidates,
                &mut self.pattern_marks,
                &mut self.text_marks,
                &mut self.tiles,
            );

            if tiled == prev_tiled {
                plateau += 1;
                instrumentation::add_plateau_hit();
                // Engineering safety valve: some input pairs otherwise
                // loop without making progress. Not a proof of
                // termination.
                if plateau > 10 {
                    break;
                }
            } else {
                plateau = 0;
            }

            if search_length > 2 * init_search_length {
                search_length /= 2;
            } else if search_length > init_search_length {
                search_length = init_search_length;
            } else if search_length > 0 {
                // Reachable only when search_length == init_search_length;
                // forces loop exit next iteration via the `>= init_search_length` guard.
                search_length -= 1;
            }
        }

        self.tiles
    }
}

/// Compute a maximal non-overlapping substring tiling between `pattern`
/// and `text`.
///
/// `init_search_length` is the minimum tile length (`L0`); no returned
/// tile is ever shorter than it. A value of `0` is saturated to `1`
/// since a zero-length tile is not meaningful.
///
/// `pattern_init_marks`/`text_init_marks` are `'0'`/`'1'` byte strings:
/// `'1'` at position `i` marks that position ineligible for any tile
/// before the algorithm starts. A marks string shorter than its input
/// leaves the remaining tail unmarked.
///
/// Returns tiles in the order they were committed by the mark phase —
/// callers needing a particular order (e.g. by `pattern_index`) should
/// sort the result themselves.
pub fn match_strings(
    pattern: &[u8],
    text: &[u8],
    init_search_length: usize,
    pattern_init_marks: &[u8],
    text_init_marks: &[u8],
) -> Vec<Tile> {
    let init_search_length = init_search_length.max(1);

    if pattern.len() < init_search_length || text.len() < init_search_length {
        return Vec::new();
    }

    let controller = Controller {
        pattern,
        text,
        pattern_marks: MarkBuffer::new(pattern.len(), pattern_init_marks),
        text_marks: MarkBuffer::new(text.len(), text_init_marks),
        tiles: Vec::new(),
    };

    controller.run(init_search_length)
}

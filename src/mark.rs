use crate::core::{MarkBuffer, Tile};
use crate::scan::Candidate;

/// Commit candidates to tiles, longest first, verifying every byte.
///
/// Candidates are sorted by descending length (stable, so ties keep scan
/// order) before committing: a short candidate committed before a longer,
/// fully-disjoint one would steal positions the longer match needed.
///
/// Candidates are not trusted: the scan phase's extension is optimistic
/// (it compares hashes, not bytes, for the initial window), so every
/// candidate is re-verified byte-for-byte against `pattern`/`text` here,
/// in addition to the unmarked check.
pub fn mark(
    pattern: &[u8],
    text: &[u8],
    mut candidates: Vec<Candidate>,
    pattern_marks: &mut MarkBuffer,
    text_marks: &mut MarkBuffer,
    tiles: &mut Vec<Tile>,
) -> usize {
    candidates.sort_by(|a, b| b.length.cmp(&a.length));

    let mut tiled_len = 0usize;
    for c in &candidates {
        let unmarked = pattern_marks.all_unmarked(c.pattern_pos, c.length)
            && text_marks.all_unmarked(c.text_pos, c.length);
        let verified = unmarked
            && pattern[c.pattern_pos..c.pattern_pos + c.length]
                == text[c.text_pos..c.text_pos + c.length];

        if !verified {
            crate::instrumentation::add_verification_failure();
            continue;
        }

        pattern_marks.mark_range(c.pattern_pos, c.length);
        text_marks.mark_range(c.text_pos, c.length);
        tiles.push(Tile {
            pattern_index: c.pattern_pos,
            text_index: c.text_pos,
            match_length: c.length,
        });
        crate::instrumentation::add_tile(c.length);
        tiled_len += c.length;
    }

    tiled_len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longer_overlapping_candidate_wins_even_out_of_order() {
        // shorter candidate appears first in the input order but should
        // lose to the longer, overlapping one once sorted.
        let pattern = b"abcdef";
        let text = b"abcdef";
        let candidates = vec![
            Candidate { pattern_pos: 0, text_pos: 0, length: 3 },
            Candidate { pattern_pos: 0, text_pos: 0, length: 6 },
        ];
        let mut pm = MarkBuffer::new(6, b"");
        let mut tm = MarkBuffer::new(6, b"");
        let mut tiles = Vec::new();

        let tiled = mark(pattern, text, candidates, &mut pm, &mut tm, &mut tiles);

        assert_eq!(tiled, 6);
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].match_length, 6);
    }

    #[test]
    fn disjoint_candidates_both_commit() {
        let pattern = b"abcdwxyz";
        let text = b"0000000000abcdwxyz0";
        let candidates = vec![
            Candidate { pattern_pos: 0, text_pos: 10, length: 4 },
            Candidate { pattern_pos: 4, text_pos: 14, length: 4 },
        ];
        let mut pm = MarkBuffer::new(pattern.len(), b"");
        let mut tm = MarkBuffer::new(text.len(), b"");
        let mut tiles = Vec::new();

        let tiled = mark(pattern, text, candidates, &mut pm, &mut tm, &mut tiles);

        assert_eq!(tiled, 8);
        assert_eq!(tiles.len(), 2);
    }

    #[test]
    fn candidate_overlapping_prior_mark_is_rejected() {
        let pattern = b"abcd";
        let text = b"abcd";
        let candidates = vec![Candidate { pattern_pos: 0, text_pos: 0, length: 4 }];
        let mut pm = MarkBuffer::new(4, b"1000");
        let mut tm = MarkBuffer::new(4, b"");
        let mut tiles = Vec::new();

        let tiled = mark(pattern, text, candidates, &mut pm, &mut tm, &mut tiles);

        assert_eq!(tiled, 0);
        assert!(tiles.is_empty());
    }

    #[test]
    fn hash_collision_candidate_fails_verification() {
        // A candidate whose positions don't actually match byte-for-byte
        // (as if produced by a hash collision) must be silently skipped.
        let pattern = b"aaaa";
        let text = b"aaab";
        let candidates = vec![Candidate { pattern_pos: 0, text_pos: 0, length: 4 }];
        let mut pm = MarkBuffer::new(4, b"");
        let mut tm = MarkBuffer::new(4, b"");
        let mut tiles = Vec::new();

        let tiled = mark(pattern, text, candidates, &mut pm, &mut tm, &mut tiles);

        assert_eq!(tiled, 0);
        assert!(tiles.is_empty());
    }
}

use ahash::AHashMap;
use smallvec::SmallVec;

use crate::core::MarkBuffer;
use crate::hash::CyclicHash;

/// A provisional match from one scan pass: hash-agreement between a
/// pattern window and a text window, optimistically extended without
/// byte-wise verification of the window itself. Authoritative only after
/// the mark phase verifies it.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub pattern_pos: usize,
    pub text_pos: usize,
    pub length: usize,
}

pub struct ScanResult {
    pub candidates: Vec<Candidate>,
    pub maxmatch: usize,
}

// Hash buckets rarely hold more than a handful of positions, so inline
// storage avoids a per-bucket heap allocation in the common case.
type Bucket = SmallVec<[usize; 4]>;

/// Build an index of every unmarked `search_length`-window in `text`,
/// keyed by rolling hash.
fn index_text(text: &[u8], text_marks: &MarkBuffer, search_length: usize) -> Option<AHashMap<u64, Bucket>> {
    let mut index: AHashMap<u64, Bucket> = AHashMap::default();
    let mut t = text_marks.first_unmarked_from(0)?;
    if t + search_length > text.len() {
        return Some(index);
    }

    let mut hash = CyclicHash::new(search_length);
    let mut initialized_at = None;

    while t + search_length <= text.len() {
        if initialized_at != Some(t) {
            hash.reset();
            for &b in &text[t..t + search_length] {
                hash.eat(b);
            }
            initialized_at = Some(t);
        }

        if text_marks.all_unmarked(t, search_length) {
            index.entry(hash.hashvalue()).or_default().push(t);
        }

        let next_t = t + 1;
        if next_t + search_length > text.len() {
            break;
        }
        hash.update(text[t], text[next_t + search_length - 1]);
        initialized_at = Some(next_t);
        t = next_t;
    }

    Some(index)
}

/// Optimistically extend a hash hit `(pattern_pos, text_pos)` beyond the
/// matched `search_length` window, counting unmarked equal bytes.
fn extend(
    pattern: &[u8],
    text: &[u8],
    pattern_marks: &MarkBuffer,
    text_marks: &MarkBuffer,
    pattern_pos: usize,
    text_pos: usize,
    search_length: usize,
) -> usize {
    let mut m = search_length;
    let mut p = pattern_pos + search_length;
    let mut t = text_pos + search_length;
    while p < pattern.len()
        && t < text.len()
        && !pattern_marks.is_marked(p)
        && !text_marks.is_marked(t)
        && pattern[p] == text[t]
    {
        m += 1;
        p += 1;
        t += 1;
    }
    m
}

/// Run one scan pass at the given `search_length`.
pub fn scan(
    pattern: &[u8],
    text: &[u8],
    pattern_marks: &MarkBuffer,
    text_marks: &MarkBuffer,
    search_length: usize,
) -> ScanResult {
    crate::instrumentation::add_scan_pass();
    let empty = ScanResult { candidates: Vec::new(), maxmatch: 0 };

    let index = match index_text(text, text_marks, search_length) {
        Some(idx) => idx,
        None => return empty,
    };

    let mut p = match pattern_marks.first_unmarked_from(0) {
        Some(p) => p,
        None => return empty,
    };
    if p + search_length > pattern.len() {
        return empty;
    }

    let mut candidates = Vec::new();
    let mut maxmatch = 0usize;

    let mut hash = CyclicHash::new(search_length);
    let mut initialized_at = None;

    while p + search_length <= pattern.len() {
        if initialized_at != Some(p) {
            hash.reset();
            for &b in &pattern[p..p + search_length] {
                hash.eat(b);
            }
            initialized_at = Some(p);
        }

        if pattern_marks.all_unmarked(p, search_length) {
            if let Some(bucket) = index.get(&hash.hashvalue()) {
                crate::instrumentation::add_lookup_candidates(bucket.len());
                for &t in bucket.iter() {
                    let m = extend(pattern, text, pattern_marks, text_marks, p, t, search_length);

                    if m > 2 * search_length {
                        crate::instrumentation::add_escalation();
                        return ScanResult { candidates: Vec::new(), maxmatch: m };
                    }

                    candidates.push(Candidate { pattern_pos: p, text_pos: t, length: m });
                    maxmatch = maxmatch.max(m);
                }
            }
        }

        let next_p = p + 1;
        if next_p + search_length > pattern.len() {
            break;
        }
        hash.update(pattern[p], pattern[next_p + search_length - 1]);
        initialized_at = Some(next_p);
        p = next_p;
    }

    ScanResult { candidates, maxmatch }
}

//! Deterministic seeded random inputs for tests, benches and the
//! profiling binaries.
//!
//! A seed goes in, a reproducible corpus comes out: the same seed always
//! produces the same bytes, so callers can reuse a case across runs.
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// `len` bytes drawn uniformly from a small lowercase alphabet, seeded so
/// the same `seed` always produces the same bytes.
pub fn random_ascii(seed: u64, len: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())]).collect()
}

/// Generate a random `text` of `text_len` bytes and a `pattern` of
/// `pattern_len` bytes copied verbatim from a random offset within it, so
/// callers have a guaranteed embedded match to exercise the tiling
/// algorithm against. Returns `(text, pattern, offset, pattern_len)`.
///
/// `pattern_len` is clamped to `text_len` if it would otherwise run past
/// the end of the generated text.
pub fn embed_pattern(seed: u64, text_len: usize, pattern_len: usize) -> (Vec<u8>, Vec<u8>, usize, usize) {
    let text_len = text_len.max(1);
    let pattern_len = pattern_len.min(text_len).max(1);

    let text = random_ascii(seed, text_len);

    let mut rng = ChaCha8Rng::seed_from_u64(seed ^ 0xA5A5_A5A5_A5A5_A5A5);
    let max_offset = text_len - pattern_len;
    let offset = if max_offset == 0 { 0 } else { rng.gen_range(0..=max_offset) };

    let pattern = text[offset..offset + pattern_len].to_vec();
    (text, pattern, offset, pattern_len)
}

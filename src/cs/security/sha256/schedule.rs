//! Message schedule: expands the 16 block words into 64 round inputs.

use super::bitops::{add, small_sigma0, small_sigma1};
use super::block::WORDS_PER_BLOCK;

/// Number of compression rounds, and therefore schedule words.
pub const ROUNDS: usize = 64;

/// Expands 16 block words with
/// `w[t] = σ1(w[t-2]) + w[t-7] + σ0(w[t-15]) + w[t-16] (mod 2^32)`.
pub fn expand(words: &[u32; WORDS_PER_BLOCK]) -> [u32; ROUNDS] {
    let mut w = [0u32; ROUNDS];
    w[..WORDS_PER_BLOCK].copy_from_slice(words);
    for t in WORDS_PER_BLOCK..ROUNDS {
        let s0 = small_sigma0(w[t - 15]);
        let s1 = small_sigma1(w[t - 2]);
        w[t] = add(add(add(w[t - 16], s0), w[t - 7]), s1);
    }
    w
}

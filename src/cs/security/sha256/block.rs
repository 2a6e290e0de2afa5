//! Splitting a padded stream into 512-bit blocks and decoding big-endian words.

use super::BLOCK_SIZE;
use crate::cs::error::{Error, Result};

/// A single 512-bit message block.
pub type Block = [u8; BLOCK_SIZE];

/// Number of 32-bit words in a block.
pub const WORDS_PER_BLOCK: usize = BLOCK_SIZE / 4;

/// Slices an already padded byte stream into consecutive 64-byte blocks.
///
/// # Errors
/// [`Error::Invariant`] if `padded.len()` is not a multiple of 64. Callers are
/// expected to have padded first; nothing is truncated or padded here.
pub fn split_blocks(padded: &[u8]) -> Result<Vec<Block>> {
    if padded.len() % BLOCK_SIZE != 0 {
        return Err(Error::Invariant { len: padded.len() });
    }
    let blocks = padded
        .chunks_exact(BLOCK_SIZE)
        .map(|chunk| {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            block
        })
        .collect();
    Ok(blocks)
}

/// Decodes a block into 16 big-endian words.
pub fn block_to_words(block: &Block) -> [u32; WORDS_PER_BLOCK] {
    let mut words = [0u32; WORDS_PER_BLOCK];
    for (word, bytes) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    words
}

//! DISCLAIMER: This library is a toy example of the SHA-256 hash function in pure Rust.
//! It is *EXCLUSIVELY* for demonstration and educational purposes. Absolutely DO NOT use it
//! for real cryptographic or security-sensitive operations. It is not constant time and
//! not audited. If you need SHA-256 in production, use a vetted library (e.g. RustCrypto).
//!
//! The hash is built from small, separately testable pieces:
//! - [`bitops`]: word rotation, modular addition and the round functions
//! - [`padding`]: Merkle-Damgard length padding
//! - [`block`]: 64-byte blocks and their big-endian words
//! - [`schedule`]: the 64-word message schedule
//! - [`compress`]: the 64-round compression function
//! - [`state`]: the chaining value and its digest encoding
//!
//! # Examples
//!
//! ```
//! use mdforge::cs::security::sha256::digest;
//!
//! assert_eq!(
//!     digest(b"abc"),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```

pub mod bitops;
pub mod block;
pub mod compress;
pub mod padding;
pub mod schedule;
pub mod state;

pub use block::{block_to_words, split_blocks, Block};
pub use compress::{compress, ROUND_CONSTANTS};
pub use padding::compute_padding;
pub use schedule::expand;
pub use state::{State, SHA256_HEX_LEN, SHA256_OUTPUT_SIZE};

use crate::cs::error::{Error, Result};

/// SHA-256 block size in bytes (512 bits).
pub const BLOCK_SIZE: usize = 64;

/// Computes the raw 32-byte SHA-256 digest of `message` in a single shot.
pub fn sha256_digest(message: &[u8]) -> [u8; SHA256_OUTPUT_SIZE] {
    let len = message.len() as u64;
    // FIPS 180-4 only defines inputs below 2^64 bits; beyond that the length
    // field holds the bit count mod 2^64.
    let pad = padding::padding_with_bit_len(len, len.wrapping_mul(8));
    let mut state = State::INITIAL;
    let body = message.chunks_exact(BLOCK_SIZE);
    let tail = body.remainder();
    for chunk in body {
        state = compress(&to_block(chunk), state);
    }
    state = absorb_aligned(state, tail, &pad);
    state.to_bytes()
}

/// Lowercase hex SHA-256 digest of `message`.
pub fn digest(message: &[u8]) -> String {
    hex::encode(sha256_digest(message))
}

/// Continues a hash from `state`, which is taken to be the chaining value
/// after `processed_len` bytes (a whole number of blocks, padding included).
/// `tail` is hashed and then padded for a total of `processed_len + tail.len()`
/// bytes.
///
/// With `State::INITIAL` and `processed_len == 0` this is plain SHA-256. With a
/// state parsed from someone else's digest it extends their message.
///
/// # Errors
/// [`Error::Overflow`] if the total length does not fit the 64-bit length field.
pub fn resume(state: State, processed_len: u64, tail: &[u8]) -> Result<State> {
    let total_len = processed_len
        .checked_add(tail.len() as u64)
        .ok_or(Error::Overflow {
            total_len: processed_len,
        })?;
    let pad = compute_padding(total_len)?;

    let mut remainder = Vec::with_capacity(tail.len() + pad.len());
    remainder.extend_from_slice(tail);
    remainder.extend_from_slice(&pad);

    let blocks = split_blocks(&remainder)?;
    log::trace!(
        "resuming from {} after {} bytes: {} block(s) to compress",
        state,
        processed_len,
        blocks.len()
    );
    Ok(blocks
        .iter()
        .fold(state, |state, block| compress(block, state)))
}

/// Compresses `tail || pad`, whose combined length is block aligned.
fn absorb_aligned(mut state: State, tail: &[u8], pad: &[u8]) -> State {
    let mut last = Vec::with_capacity(tail.len() + pad.len());
    last.extend_from_slice(tail);
    last.extend_from_slice(pad);
    for chunk in last.chunks_exact(BLOCK_SIZE) {
        state = compress(&to_block(chunk), state);
    }
    state
}

fn to_block(chunk: &[u8]) -> Block {
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(chunk);
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use sha2::{Digest, Sha256};

    fn reference(message: &[u8]) -> String {
        hex::encode(Sha256::digest(message))
    }

    #[test]
    fn test_sha256_empty() {
        assert_eq!(
            digest(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_sha256_abc() {
        assert_eq!(
            digest(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_sha256_two_block_message() {
        // FIPS 180-2 appendix B.2
        assert_eq!(
            digest(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
            "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
        );
    }

    #[test]
    fn test_sha256_million_a() {
        let message = vec![b'a'; 1_000_000];
        assert_eq!(
            digest(&message),
            "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
        );
    }

    #[test]
    fn test_sha256_quick_brown_fox() {
        assert_eq!(
            digest(b"The quick brown fox jumps over the lazy dog"),
            "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592"
        );
    }

    #[test]
    fn test_boundary_lengths_match_reference() {
        for len in [0usize, 1, 55, 56, 57, 63, 64, 65, 119, 120, 127, 128, 1000] {
            let message: Vec<u8> = (0..len).map(|i| (i * 31 + 7) as u8).collect();
            assert_eq!(digest(&message), reference(&message), "length {}", len);
        }
    }

    #[test]
    fn test_raw_digest_matches_hex() {
        let raw = sha256_digest(b"keysecret");
        assert_eq!(hex::encode(raw), digest(b"keysecret"));
        assert_eq!(raw.len(), SHA256_OUTPUT_SIZE);
    }

    #[test]
    fn test_resume_from_initial_is_plain_sha256() {
        for len in [0usize, 3, 55, 56, 64, 200] {
            let message = vec![0x42u8; len];
            let state = resume(State::INITIAL, 0, &message).unwrap();
            assert_eq!(state.to_hex(), digest(&message));
        }
    }

    #[test]
    fn test_resume_after_whole_blocks() {
        // Hash the first block by hand, then let resume finish the rest.
        let message: Vec<u8> = (0..150u8).collect();
        let first = to_block(&message[..BLOCK_SIZE]);
        let mid = compress(&first, State::INITIAL);
        let state = resume(mid, BLOCK_SIZE as u64, &message[BLOCK_SIZE..]).unwrap();
        assert_eq!(state.to_hex(), reference(&message));
    }

    #[test]
    fn test_resume_rejects_overflowing_total() {
        assert!(matches!(
            resume(State::INITIAL, u64::MAX, b"x"),
            Err(Error::Overflow { .. })
        ));
        assert!(matches!(
            resume(State::INITIAL, u64::MAX / 8, b"x"),
            Err(Error::Overflow { .. })
        ));
    }

    proptest! {
        #[test]
        fn matches_reference(message in proptest::collection::vec(any::<u8>(), 0..300)) {
            prop_assert_eq!(digest(&message), reference(&message));
        }

        #[test]
        fn is_deterministic(message in proptest::collection::vec(any::<u8>(), 0..200)) {
            prop_assert_eq!(sha256_digest(&message), sha256_digest(&message));
        }
    }
}

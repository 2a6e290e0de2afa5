//! The eight-word chaining value threaded through the compression function.
//!
//! A digest *is* the chaining value after the last block, serialized
//! big-endian. [`State::from_hex`] undoes that serialization, and the result is
//! indistinguishable from a state reached by hashing: the length-extension
//! attack is built on exactly this.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::cs::error::{Error, Result};

/// Size of a SHA-256 digest in bytes (256 bits = 32 bytes).
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Length of a hex-encoded SHA-256 digest.
pub const SHA256_HEX_LEN: usize = SHA256_OUTPUT_SIZE * 2;

/// SHA-256 chaining value `h0..h7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State([u32; 8]);

impl State {
    /// Initial hash value H(0): the first 32 bits of the fractional parts of
    /// the square roots of the first eight primes.
    pub const INITIAL: State = State([
        0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab,
        0x5be0cd19,
    ]);

    pub const fn from_words(words: [u32; 8]) -> Self {
        State(words)
    }

    pub const fn words(&self) -> [u32; 8] {
        self.0
    }

    /// Reads eight big-endian words.
    pub fn from_bytes(bytes: &[u8; SHA256_OUTPUT_SIZE]) -> Self {
        let mut words = [0u32; 8];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        State(words)
    }

    /// Serializes `h0..h7` as big-endian bytes, i.e. the raw digest.
    pub fn to_bytes(&self) -> [u8; SHA256_OUTPUT_SIZE] {
        let mut out = [0u8; SHA256_OUTPUT_SIZE];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.0.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }

    /// Parses a 64-character hex digest back into a chaining value.
    ///
    /// # Errors
    /// [`Error::Format`] if `hex_digest` is not exactly 64 hex characters.
    pub fn from_hex(hex_digest: &str) -> Result<Self> {
        if hex_digest.len() != SHA256_HEX_LEN {
            return Err(Error::format(format!(
                "expected {} hex characters, got {}",
                SHA256_HEX_LEN,
                hex_digest.len()
            )));
        }
        let mut bytes = [0u8; SHA256_OUTPUT_SIZE];
        hex::decode_to_slice(hex_digest, &mut bytes)?;
        Ok(State::from_bytes(&bytes))
    }

    /// Lowercase hex encoding of [`State::to_bytes`].
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

impl Default for State {
    fn default() -> Self {
        State::INITIAL
    }
}

impl From<[u32; 8]> for State {
    fn from(words: [u32; 8]) -> Self {
        State(words)
    }
}

impl FromStr for State {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        State::from_hex(s)
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for word in self.0.iter() {
            write!(f, "{:08x}", word)?;
        }
        Ok(())
    }
}

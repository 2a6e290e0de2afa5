//! DISCLAIMER: `PrefixMac` is deliberately BROKEN. `SHA-256(key || message)` is
//! vulnerable to length extension (see [`super::length_extension`]) and exists
//! here only as the victim for that demonstration. Use HMAC instead.

use rand::{rngs::StdRng, Rng, SeedableRng};

use super::sha256::{digest, State};

/// Configuration for generating a random [`PrefixMac`] key.
#[derive(Debug, Clone)]
pub struct PrefixMacKeyGenConfig {
    /// Key length in bytes.
    pub key_len: usize,
    /// Optional RNG seed for reproducible demos.
    pub seed: Option<u64>,
}

impl Default for PrefixMacKeyGenConfig {
    fn default() -> Self {
        Self {
            key_len: 16,
            seed: None,
        }
    }
}

/// The naive keyed hash `SHA-256(key || message)`.
#[derive(Clone)]
pub struct PrefixMac {
    key: Vec<u8>,
}

impl std::fmt::Debug for PrefixMac {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrefixMac")
            .field("key_len", &self.key.len())
            .finish()
    }
}

impl PrefixMac {
    pub fn new(key: impl Into<Vec<u8>>) -> Self {
        Self { key: key.into() }
    }

    /// Creates a MAC with a random key of `config.key_len` bytes.
    pub fn generate(config: &PrefixMacKeyGenConfig) -> Self {
        let mut rng = match config.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let mut key = vec![0u8; config.key_len];
        rng.fill(&mut key[..]);
        Self { key }
    }

    pub fn key_len(&self) -> usize {
        self.key.len()
    }

    /// Hex tag for `message`.
    pub fn sign(&self, message: &[u8]) -> String {
        let mut data = Vec::with_capacity(self.key.len() + message.len());
        data.extend_from_slice(&self.key);
        data.extend_from_slice(message);
        digest(&data)
    }

    /// Checks a hex tag. Malformed tags are rejected rather than reported.
    pub fn verify(&self, message: &[u8], tag: &str) -> bool {
        match (State::from_hex(tag), State::from_hex(&self.sign(message))) {
            (Ok(given), Ok(expected)) => given == expected,
            _ => false,
        }
    }
}

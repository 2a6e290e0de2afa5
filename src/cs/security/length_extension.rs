//! DISCLAIMER: This module demonstrates an attack. It exists for teaching why
//! `H(key || message)` is not a MAC. Use HMAC for real message authentication.
//!
//! SHA-256 is a Merkle-Damgard hash, so its digest is the full internal state
//! after the last padded block. Anyone holding `digest(key || message)` can
//! load that state and keep compressing. All they need to rebuild the padding
//! the victim applied (the *glue*) is the total prefix length, so a guess of
//! the key length replaces knowledge of the key itself.
//!
//! ```text
//! victim hashed:   key || message || glue
//! attacker hashes:                          extension || final padding
//!                  \____ digest = state ___/
//! ```
//!
//! # Examples
//!
//! ```
//! use mdforge::cs::security::length_extension::forge;
//! use mdforge::cs::security::sha256::digest;
//!
//! let leaked = digest(b"keysecret");
//! let forgery = forge(b"secret", &leaked, b"altered", 3).unwrap();
//!
//! let mut signed = b"key".to_vec();
//! signed.extend_from_slice(&forgery.message);
//! assert_eq!(forgery.digest, digest(&signed));
//! ```

use std::ops::RangeInclusive;

use rayon::prelude::*;

use super::sha256::{compute_padding, resume, State};
use crate::cs::error::{Error, Result};

/// A message the attacker built and the digest it will carry under the
/// victim's key, assuming the key length was guessed right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forgery {
    /// `original || glue || extension`, without the key.
    pub message: Vec<u8>,
    /// Lowercase hex digest of `key || message`.
    pub digest: String,
}

impl From<Forgery> for (Vec<u8>, String) {
    fn from(forgery: Forgery) -> Self {
        (forgery.message, forgery.digest)
    }
}

/// Configuration for [`search_key_length`].
#[derive(Debug, Clone)]
pub struct KeyLengthSearchConfig {
    /// Smallest key length to try.
    pub min_key_len: usize,
    /// Largest key length to try, inclusive.
    pub max_key_len: usize,
    /// Forge the candidates on the rayon thread pool.
    pub parallel: bool,
}

impl Default for KeyLengthSearchConfig {
    fn default() -> Self {
        Self {
            min_key_len: 1,
            max_key_len: 64,
            parallel: false,
        }
    }
}

impl KeyLengthSearchConfig {
    fn candidates(&self) -> RangeInclusive<usize> {
        self.min_key_len..=self.max_key_len
    }
}

/// The key length an oracle accepted and the forgery it accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyLengthMatch {
    pub key_len: usize,
    pub forgery: Forgery,
}

/// Padding the victim appended after `key || original`, given a guess of the
/// key length.
///
/// # Errors
/// [`Error::Overflow`] if the assumed prefix is too long to pad.
pub fn glue_padding(assumed_key_len: usize, original_len: usize) -> Result<Vec<u8>> {
    let prefix_len = prefix_len(assumed_key_len, original_len)?;
    compute_padding(prefix_len)
}

/// Extends `original` with `extension` and computes the digest the victim
/// would produce for `key || forged message`, given only the leaked digest of
/// `key || original` and a guess of `key.len()`.
///
/// A wrong `assumed_key_len` still yields a well-formed forgery, it just will
/// not verify.
///
/// # Errors
/// - [`Error::Format`] if `leaked_hex` is not a 64-character hex digest.
/// - [`Error::Overflow`] if the forged message would be too long to pad.
pub fn forge(
    original: &[u8],
    leaked_hex: &str,
    extension: &[u8],
    assumed_key_len: usize,
) -> Result<Forgery> {
    let state = State::from_hex(leaked_hex)?;
    forge_from_state(state, original, extension, assumed_key_len)
}

fn forge_from_state(
    state: State,
    original: &[u8],
    extension: &[u8],
    assumed_key_len: usize,
) -> Result<Forgery> {
    let prefix_len = prefix_len(assumed_key_len, original.len())?;
    let glue = compute_padding(prefix_len)?;
    // The leaked state already covers key || original || glue.
    let processed_len = prefix_len
        .checked_add(glue.len() as u64)
        .ok_or(Error::Overflow {
            total_len: prefix_len,
        })?;

    log::debug!(
        "forging with key length {}: {} byte prefix, {} byte glue, {} byte extension",
        assumed_key_len,
        prefix_len,
        glue.len(),
        extension.len()
    );

    let forged_state = resume(state, processed_len, extension)?;

    let mut message = Vec::with_capacity(original.len() + glue.len() + extension.len());
    message.extend_from_slice(original);
    message.extend_from_slice(&glue);
    message.extend_from_slice(extension);

    Ok(Forgery {
        message,
        digest: forged_state.to_hex(),
    })
}

/// Tries every key length in the configured range and returns the smallest
/// one whose forgery `verify` accepts. `verify` plays the server: it gets the
/// forged message and digest and reports whether the MAC checks out.
///
/// Returns `Ok(None)` if no candidate verifies. With `config.parallel` the
/// candidates are forged concurrently; the smallest matching length still wins.
///
/// # Errors
/// [`Error::Format`] for a malformed `leaked_hex`, before any candidate is
/// tried. A candidate whose forgery overflows the length field is skipped.
pub fn search_key_length<V>(
    original: &[u8],
    leaked_hex: &str,
    extension: &[u8],
    config: &KeyLengthSearchConfig,
    verify: V,
) -> Result<Option<KeyLengthMatch>>
where
    V: Fn(&[u8], &str) -> bool + Sync,
{
    let state = State::from_hex(leaked_hex)?;

    let try_len = |key_len: usize| -> Option<KeyLengthMatch> {
        let forgery = forge_from_state(state, original, extension, key_len).ok()?;
        let accepted = verify(&forgery.message[..], forgery.digest.as_str());
        log::trace!(
            "key length {}: forged {} -> {}",
            key_len,
            forgery.digest,
            if accepted { "accepted" } else { "rejected" }
        );
        accepted.then_some(KeyLengthMatch { key_len, forgery })
    };

    let found = if config.parallel {
        config
            .candidates()
            .into_par_iter()
            .filter_map(try_len)
            .find_first(|_| true)
    } else {
        config.candidates().find_map(try_len)
    };

    match &found {
        Some(hit) => log::debug!("oracle accepted key length {}", hit.key_len),
        None => log::debug!(
            "no key length in {:?} was accepted",
            config.candidates()
        ),
    }
    Ok(found)
}

fn prefix_len(key_len: usize, original_len: usize) -> Result<u64> {
    (key_len as u64)
        .checked_add(original_len as u64)
        .ok_or(Error::Overflow {
            total_len: key_len as u64,
        })
}

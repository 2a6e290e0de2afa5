//! Merkle-Damgard strengthening for SHA-256.
//!
//! The padding only depends on how many bytes are *logically* in front of it,
//! not on what those bytes are. That is what lets the length-extension attack
//! rebuild the glue bytes for a prefix it has never seen.
//!
//! ```text
//! | prefix (n bytes) | 0x80 | 0x00 ... 0x00 | n * 8 as u64 big-endian |
//! |<-------------- multiple of 64 bytes ---------------------------->|
//! ```

use super::BLOCK_SIZE;
use crate::cs::error::{Error, Result};

/// Size of the trailing big-endian bit-length field.
pub const LENGTH_FIELD_SIZE: usize = 8;

/// Offset inside a block where the length field starts.
const LENGTH_OFFSET: usize = BLOCK_SIZE - LENGTH_FIELD_SIZE;

/// Returns the padding that follows `total_len` bytes of message.
///
/// The result starts with `0x80`, is zero filled until the stream sits at
/// offset 56 of a block, and ends with `total_len * 8` as a big-endian `u64`,
/// so `total_len + padding.len()` is always a multiple of 64.
///
/// # Errors
/// [`Error::Overflow`] if `total_len * 8` does not fit in 64 bits.
pub fn compute_padding(total_len: u64) -> Result<Vec<u8>> {
    let bit_len = total_len
        .checked_mul(8)
        .ok_or(Error::Overflow { total_len })?;
    Ok(padding_with_bit_len(total_len, bit_len))
}

/// Number of padding bytes `compute_padding(total_len)` produces (9..=72).
pub fn padding_len(total_len: u64) -> usize {
    let offset = (total_len % BLOCK_SIZE as u64) as usize;
    let zeros = (LENGTH_OFFSET + BLOCK_SIZE - (offset + 1) % BLOCK_SIZE) % BLOCK_SIZE;
    1 + zeros + LENGTH_FIELD_SIZE
}

/// Builds the padding with an explicit length field. The digest path uses this
/// with a wrapped bit count so it never fails on in-memory input.
pub(crate) fn padding_with_bit_len(total_len: u64, bit_len: u64) -> Vec<u8> {
    let len = padding_len(total_len);
    let mut pad = vec![0u8; len];
    pad[0] = 0x80;
    pad[len - LENGTH_FIELD_SIZE..].copy_from_slice(&bit_len.to_be_bytes());
    pad
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_message_padding() {
        let pad = compute_padding(0).unwrap();
        assert_eq!(pad.len(), 64);
        assert_eq!(pad[0], 0x80);
        assert!(pad[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_boundary_lengths() {
        // 55 bytes leave exactly room for 0x80 and the length field.
        assert_eq!(compute_padding(55).unwrap().len(), 9);
        // 56 bytes push the length field into a second block.
        assert_eq!(compute_padding(56).unwrap().len(), 72);
        assert_eq!(compute_padding(63).unwrap().len(), 65);
        assert_eq!(compute_padding(64).unwrap().len(), 64);
        assert_eq!(compute_padding(119).unwrap().len(), 9);
    }

    #[test]
    fn test_length_field_is_big_endian_bits() {
        let pad = compute_padding(3).unwrap();
        assert_eq!(&pad[pad.len() - 8..], &[0, 0, 0, 0, 0, 0, 0, 24]);

        let pad = compute_padding(0x0102).unwrap();
        assert_eq!(&pad[pad.len() - 8..], &0x0810u64.to_be_bytes());
    }

    #[test]
    fn test_matches_padding_len() {
        for n in 0..200u64 {
            assert_eq!(compute_padding(n).unwrap().len(), padding_len(n));
        }
    }

    #[test]
    fn test_largest_supported_length() {
        let max = u64::MAX / 8;
        let pad = compute_padding(max).unwrap();
        assert_eq!(&pad[pad.len() - 8..], &(max * 8).to_be_bytes());
    }

    #[test]
    fn test_overflowing_length_is_rejected() {
        let too_long = u64::MAX / 8 + 1;
        assert_eq!(
            compute_padding(too_long),
            Err(Error::Overflow {
                total_len: too_long
            })
        );
        assert!(compute_padding(u64::MAX).is_err());
    }

    proptest! {
        #[test]
        fn padding_aligns_stream_and_records_length(n in 0u64..(u64::MAX / 8)) {
            let pad = compute_padding(n).unwrap();
            prop_assert_eq!((n + pad.len() as u64) % 64, 0);
            prop_assert_eq!(pad[0], 0x80);
            let mut field = [0u8; 8];
            field.copy_from_slice(&pad[pad.len() - 8..]);
            prop_assert_eq!(u64::from_be_bytes(field), n * 8);
            prop_assert!(pad[1..pad.len() - 8].iter().all(|&b| b == 0));
        }
    }
}

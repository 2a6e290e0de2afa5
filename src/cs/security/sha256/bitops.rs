//! 32-bit word primitives and the SHA-256 logical functions (FIPS 180-4, 4.1.2).
//!
//! Every addition between words wraps modulo 2^32.

/// Circular right rotation of a 32-bit word.
#[inline]
pub fn rotr(value: u32, bits: u32) -> u32 {
    value.rotate_right(bits)
}

/// Word addition modulo 2^32.
#[inline]
pub fn add(a: u32, b: u32) -> u32 {
    a.wrapping_add(b)
}

/// Choose: for each bit, `f` where `e` is set, otherwise `g`.
#[inline]
pub fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ (!e & g)
}

/// Majority of the three inputs, bit by bit.
#[inline]
pub fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Σ0, applied to register `a` in each round.
#[inline]
pub fn big_sigma0(x: u32) -> u32 {
    rotr(x, 2) ^ rotr(x, 13) ^ rotr(x, 22)
}

/// Σ1, applied to register `e` in each round.
#[inline]
pub fn big_sigma1(x: u32) -> u32 {
    rotr(x, 6) ^ rotr(x, 11) ^ rotr(x, 25)
}

/// σ0, used by the message schedule on `w[t-15]`.
#[inline]
pub fn small_sigma0(x: u32) -> u32 {
    rotr(x, 7) ^ rotr(x, 18) ^ (x >> 3)
}

/// σ1, used by the message schedule on `w[t-2]`.
#[inline]
pub fn small_sigma1(x: u32) -> u32 {
    rotr(x, 17) ^ rotr(x, 19) ^ (x >> 10)
}

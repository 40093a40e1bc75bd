//! Bitwise and arithmetic primitives on little-endian byte buffers.
//!
//! A buffer of `n` bytes stands in for an `8n`-bit word: byte 0 holds bits
//! `0..8`. All binary operations take buffers of equal length, and the
//! destination never aliases an input. Overflow out of the top byte is
//! dropped, exactly like wrapping arithmetic on a native word.
use itertools::izip;

/// `dst = src << n`.
#[inline]
pub fn shl(dst: &mut [u8], src: &[u8], n: usize) {
    debug_assert_eq!(dst.len(), src.len());
    dst.copy_from_slice(src);
    shl_assign(dst, n);
}

/// `a <<= n`.
pub fn shl_assign(a: &mut [u8], n: usize) {
    let len = a.len();
    let (bytes, bits) = (n / 8, n % 8);
    if bytes >= len {
        a.fill(0);
        return;
    }

    // Whole-byte shift: move everything up by `bytes` and zero the bottom.
    if bytes > 0 {
        a.copy_within(0..len - bytes, bytes);
        a[..bytes].fill(0);
    }

    // Sub-byte shift, carrying the top bits of each byte into the next one.
    // Going from high to low, `a[i - 1]` is still unshifted when it's read.
    if bits > 0 {
        for i in (1..len).rev() {
            a[i] = (a[i] << bits) | (a[i - 1] >> (8 - bits));
        }
        a[0] <<= bits;
    }
}

/// `dst = a | b`.
#[inline]
pub fn or(dst: &mut [u8], a: &[u8], b: &[u8]) {
    for (d, &x, &y) in izip!(dst, a, b) {
        *d = x | y;
    }
}

/// `dst = a & b`.
#[inline]
pub fn and(dst: &mut [u8], a: &[u8], b: &[u8]) {
    for (d, &x, &y) in izip!(dst, a, b) {
        *d = x & y;
    }
}

/// `dst = a ^ b`.
#[inline]
pub fn xor(dst: &mut [u8], a: &[u8], b: &[u8]) {
    for (d, &x, &y) in izip!(dst, a, b) {
        *d = x ^ y;
    }
}

/// `dst |= a`.
#[inline]
pub fn or_assign(dst: &mut [u8], a: &[u8]) {
    for (d, &x) in izip!(dst, a) {
        *d |= x;
    }
}

/// `dst ^= a`.
#[inline]
pub fn xor_assign(dst: &mut [u8], a: &[u8]) {
    for (d, &x) in izip!(dst, a) {
        *d ^= x;
    }
}

/// `a = !a`.
#[inline]
pub fn not_assign(a: &mut [u8]) {
    for d in a {
        *d = !*d;
    }
}

/// `dst = a + b`, wrapping.
///
/// Ripple-carry addition from the lowest byte up; the 16-bit sum of two bytes
/// and the incoming carry holds the outgoing carry in its high byte.
#[inline]
pub fn add(dst: &mut [u8], a: &[u8], b: &[u8]) {
    let mut carry = 0u16;
    for (d, &x, &y) in izip!(dst, a, b) {
        let s = x as u16 + y as u16 + carry;
        *d = s as u8;
        carry = s >> 8;
    }
}

/// `a != 0`. Stops at the first non-zero byte.
#[inline]
pub fn is_nonzero(a: &[u8]) -> bool {
    a.iter().any(|&x| x != 0)
}

/// `a |= 1 << i`.
#[inline]
pub fn set_bit(a: &mut [u8], i: usize) {
    a[i / 8] |= 1 << (i % 8);
}

//! Pattern masks ('profiles') of a query.
//!
//! Entry `c` of a profile has bit `i` set iff `query[i]` is the `c`'th letter.
//! This is the only per-character lookup the automaton does.
use crate::{
    alphabet::{rank_unchecked, ALPHABET_LEN},
    word::Word,
};

/// One bitmask per letter of the alphabet.
pub type Profile<W> = [W; ALPHABET_LEN];

/// Build the profile of `query` in a single lane word.
///
/// NOTE: Assumes `query` is validated and `query.len() <= W::BITS`.
#[inline(always)]
pub fn profile<W: Word>(query: &[u8]) -> Profile<W> {
    debug_assert!(query.len() <= W::BITS);
    let mut p = [W::zero(); ALPHABET_LEN];
    for (i, &c) in query.iter().enumerate() {
        p[rank_unchecked(c)] = p[rank_unchecked(c)] | (W::one() << i);
    }
    p
}

/// Build the profile of `query` into `p`, which holds `ALPHABET_LEN` rows of
/// `bytes` little-endian bytes each.
///
/// NOTE: Assumes `query` is validated and `query.len() <= 8 * bytes`.
pub fn wide_profile(query: &[u8], bytes: usize, p: &mut [u8]) {
    debug_assert_eq!(p.len(), ALPHABET_LEN * bytes);
    debug_assert!(query.len() <= 8 * bytes);
    p.fill(0);
    for (i, &c) in query.iter().enumerate() {
        p[rank_unchecked(c) * bytes + i / 8] |= 1 << (i % 8);
    }
}

/// The row of letter `c` in a profile built by [`wide_profile`].
#[inline(always)]
pub fn wide_row(p: &[u8], bytes: usize, c: u8) -> &[u8] {
    let r = rank_unchecked(c);
    &p[r * bytes..(r + 1) * bytes]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello() {
        let p = profile::<u8>(b"hello");
        assert_eq!(p[(b'h' - b'a') as usize], 0b00001);
        assert_eq!(p[(b'e' - b'a') as usize], 0b00010);
        assert_eq!(p[(b'l' - b'a') as usize], 0b01100);
        assert_eq!(p[(b'o' - b'a') as usize], 0b10000);
        assert_eq!(p.iter().filter(|&&m| m != 0).count(), 4);
    }

    #[test]
    fn full_width() {
        let q = [b'z'; 128];
        let p = profile::<u128>(&q);
        assert_eq!(p[25], u128::MAX);
        let p = profile::<u8>(&q[..8]);
        assert_eq!(p[25], u8::MAX);
    }

    #[test]
    fn empty() {
        assert_eq!(profile::<u64>(b""), [0; ALPHABET_LEN]);
    }

    #[test]
    fn wide_matches_native() {
        let q = b"thequickbrownfoxjumpsoverthelazydogandkeepsrunningalongtheriver";
        let native = profile::<u64>(q);
        let mut wide = vec![0xff; ALPHABET_LEN * 8];
        wide_profile(q, 8, &mut wide);
        for c in b'a'..=b'z' {
            let row = u64::from_le_bytes(wide_row(&wide, 8, c).try_into().unwrap());
            assert_eq!(row, native[(c - b'a') as usize], "letter {}", c as char);
        }
    }
}

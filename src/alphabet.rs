//! The fixed input alphabet: the 26 lowercase ASCII letters.
//!
//! All kernels index their pattern tables through [`rank`], and reject input
//! through [`validate`] before doing any automaton work.

use crate::error::{Error, Result, WordKind};

/// Number of distinct symbols.
pub const ALPHABET_LEN: usize = 26;
/// The byte that maps to rank 0.
pub const ALPHABET_BASE: u8 = b'a';

/// Rank of `c` in the alphabet, or `None` when `c` is not a lowercase letter.
#[inline(always)]
pub fn rank(c: u8) -> Option<usize> {
    let r = c.wrapping_sub(ALPHABET_BASE) as usize;
    (r < ALPHABET_LEN).then_some(r)
}

/// Rank of a byte that already passed [`validate`].
#[inline(always)]
pub(crate) fn rank_unchecked(c: u8) -> usize {
    debug_assert!(rank(c).is_some());
    (c - ALPHABET_BASE) as usize
}

/// Check that every byte of `word` lies in the alphabet.
pub fn validate(word: &[u8], kind: WordKind) -> Result<()> {
    match word.iter().position(|&c| rank(c).is_none()) {
        None => Ok(()),
        Some(pos) => Err(Error::InvalidByte {
            word: kind,
            pos,
            byte: word[pos],
        }),
    }
}

//! The arbitrary-precision kernel: one query against one candidate, with no
//! bound on their lengths.
//!
//! This is the automaton of [`crate::myers::compute_block`], but every word is
//! a byte buffer of `ceil(max(|query|, |candidate|) / 8)` bytes and every
//! operation goes through [`crate::wide`]. Each step costs `O(bytes)` instead
//! of `O(1)`, so this is only meant for words longer than 128 characters.
use log::trace;

use crate::{
    alphabet::ALPHABET_LEN,
    error::{Error, Result},
    input::{check_candidate, check_query},
    profile::{wide_profile, wide_row},
    wide,
};

/// Longest query or candidate, so that the distance fits the `u32` result.
pub const MAX_LEN: usize = u32::MAX as usize;

/// Number of word-sized registers next to the profile.
const REGISTERS: usize = 11;

/// The single heap allocation of one kernel call.
///
/// Holds the profile and all registers back to back. It is owned by the call
/// and released when it goes out of scope, on every return path.
struct Scratch {
    buf: Vec<u8>,
    bytes: usize,
}

/// Disjoint views into a [`Scratch`].
struct Registers<'a> {
    profile: &'a mut [u8],
    vp: &'a mut [u8],
    vn: &'a mut [u8],
    x: &'a mut [u8],
    y: &'a mut [u8],
    hn: &'a mut [u8],
    hp: &'a mut [u8],
    d0: &'a mut [u8],
    one: &'a mut [u8],
    last: &'a mut [u8],
    t0: &'a mut [u8],
    t1: &'a mut [u8],
}

impl Scratch {
    /// Reserve zeroed space for words of `len` bits.
    fn new(len: usize) -> Result<Self> {
        let bytes = len.div_ceil(8);
        let total = bytes
            .checked_mul(ALPHABET_LEN + REGISTERS)
            .ok_or(Error::ScratchOverflow { len })?;
        let mut buf = Vec::new();
        buf.try_reserve_exact(total)
            .map_err(|source| Error::ScratchAlloc {
                bytes: total,
                source,
            })?;
        buf.resize(total, 0);
        trace!("anyx1 scratch: {bytes} bytes per word, {total} bytes total");
        Ok(Self { buf, bytes })
    }

    fn registers(&mut self) -> Registers<'_> {
        let bytes = self.bytes;
        let mut rest = self.buf.as_mut_slice();
        Registers {
            profile: carve(&mut rest, ALPHABET_LEN * bytes),
            vp: carve(&mut rest, bytes),
            vn: carve(&mut rest, bytes),
            x: carve(&mut rest, bytes),
            y: carve(&mut rest, bytes),
            hn: carve(&mut rest, bytes),
            hp: carve(&mut rest, bytes),
            d0: carve(&mut rest, bytes),
            one: carve(&mut rest, bytes),
            last: carve(&mut rest, bytes),
            t0: carve(&mut rest, bytes),
            t1: carve(&mut rest, bytes),
        }
    }
}

/// Split the first `n` bytes off `rest`.
fn carve<'a>(rest: &mut &'a mut [u8], n: usize) -> &'a mut [u8] {
    let (head, tail) = std::mem::take(rest).split_at_mut(n);
    *rest = tail;
    head
}

/// Distance between `query` and `candidate`, each at most [`MAX_LEN`] long.
pub fn myers_anyx1(query: &[u8], candidate: &[u8]) -> Result<u32> {
    check_query(query, MAX_LEN)?;
    check_candidate(0, candidate, MAX_LEN)?;
    if query.is_empty() {
        return Ok(candidate.len() as u32);
    }

    let mut scratch = Scratch::new(query.len().max(candidate.len()))?;
    let bytes = scratch.bytes;
    let Registers {
        profile,
        vp,
        vn,
        x,
        y,
        hn,
        hp,
        d0,
        one,
        last,
        t0,
        t1,
    } = scratch.registers();

    wide_profile(query, bytes, profile);
    // In the first column, vertical deltas are all +1.
    vp.fill(u8::MAX);
    wide::set_bit(one, 0);
    // The bit of the last query row.
    wide::shl(last, one, query.len() - 1);

    let mut score = query.len() as u32;
    for &c in candidate {
        let eq = wide_row(profile, bytes, c);

        // x = eq | vn
        wide::or(x, eq, vn);
        // d0 = ((vp + (x & vp)) ^ vp) | x
        wide::and(t0, x, vp);
        wide::add(t1, vp, t0);
        wide::xor_assign(t1, vp);
        wide::or(d0, t1, x);
        // hn = vp & d0
        wide::and(hn, vp, d0);
        // hp = vn | !(vp | d0)
        wide::or(t0, vp, d0);
        wide::not_assign(t0);
        wide::or(hp, vn, t0);
        // y = (hp << 1) | 1
        wide::shl(y, hp, 1);
        wide::or_assign(y, one);
        // vn = y & d0
        wide::and(vn, y, d0);
        // vp = (hn << 1) | !(y | d0)
        wide::or(t0, y, d0);
        wide::not_assign(t0);
        wide::shl(t1, hn, 1);
        wide::or(vp, t1, t0);

        wide::and(t0, hp, last);
        if wide::is_nonzero(t0) {
            score += 1;
        } else {
            wide::and(t0, hn, last);
            if wide::is_nonzero(t0) {
                score -= 1;
            }
        }
    }
    Ok(score)
}

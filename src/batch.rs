//! Lane batch kernels: one query against `N` candidates at once.
//!
//! Lane `k` holds the automaton state of `candidates[k]` in one word `W`.
//! All lanes advance in lock-step for `max_len` steps, where `max_len` is the
//! length of the longest candidate. Once a lane is past the end of its own
//! candidate it keeps stepping (on an all-zero pattern mask) but its score
//! is frozen by comparing the step index against the lane's stored length.
//! This keeps every lane on the same instruction stream.
use std::array::from_fn;

use crate::{
    alphabet::rank_unchecked,
    error::Result,
    input::{check_candidate, check_query, BatchInput},
    myers::{compute_block_lanes, delta},
    profile::profile,
    word::Word,
};

/// Run the automaton of `input.query` against all lanes.
///
/// `input.query` must fit in `W`, and each candidate length must fit in `W`
/// since lengths and scores are stored in `W` as well.
pub fn compute<W: Word, const N: usize>(input: &BatchInput<'_, N>) -> Result<[W; N]> {
    let BatchInput { query, candidates } = *input;
    check_query(query, W::BITS)?;
    for (lane, candidate) in candidates.iter().enumerate() {
        check_candidate(lane, candidate, W::MAX_LEN)?;
    }
    let lens: [W; N] = from_fn(|k| W::from_len(candidates[k].len()));

    // The distance to the empty query is the candidate length.
    // This also avoids the invalid shift by `query.len() - 1` below.
    if query.is_empty() {
        return Ok(lens);
    }

    let profile = profile::<W>(query);
    // The bit of the last query row, whose horizontal deltas change the score.
    let last = W::one() << (query.len() - 1);

    // In the first column, vertical deltas are all +1.
    let mut vp = [W::max_value(); N];
    let mut vn = [W::zero(); N];
    let mut hp = [W::zero(); N];
    let mut hn = [W::zero(); N];
    let mut score = [W::from_len(query.len()); N];

    for i in 0..input.max_len() {
        let iw = W::from_len(i);
        // Lanes past their own end read the sentinel mask 0 instead of
        // reading beyond their slice.
        let eq: [W; N] = from_fn(|k| match candidates[k].get(i) {
            Some(&c) => profile[rank_unchecked(c)],
            None => W::zero(),
        });
        compute_block_lanes(&mut vp, &mut vn, &eq, &mut hp, &mut hn);

        for k in 0..N {
            let live = iw < lens[k];
            let (inc, dec) = delta(hp[k], hn[k], last);
            score[k] = score[k]
                .wrapping_add(&W::from_len((live && inc) as usize))
                .wrapping_sub(&W::from_len((live && dec) as usize));
        }
    }
    Ok(score)
}

/// 16 lanes of 8 bits: queries up to 8, candidates up to 255 characters.
pub fn myers_8x16(input: &BatchInput<'_, 16>) -> Result<[u8; 16]> {
    compute::<u8, 16>(input)
}

/// 8 lanes of 16 bits: queries up to 16 characters.
pub fn myers_16x8(input: &BatchInput<'_, 8>) -> Result<[u16; 8]> {
    compute::<u16, 8>(input)
}

/// 4 lanes of 32 bits: queries up to 32 characters.
pub fn myers_32x4(input: &BatchInput<'_, 4>) -> Result<[u32; 4]> {
    compute::<u32, 4>(input)
}

/// 2 lanes of 64 bits: queries up to 64 characters.
pub fn myers_64x2(input: &BatchInput<'_, 2>) -> Result<[u64; 2]> {
    compute::<u64, 2>(input)
}

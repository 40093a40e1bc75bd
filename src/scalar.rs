//! Single-lane kernels: one query against one candidate in a native word.
use crate::{
    alphabet::rank_unchecked,
    error::Result,
    input::{check_candidate, check_query},
    myers::{compute_block, delta},
    profile::profile,
    word::Word,
};

/// Distance between `query` (at most `W::BITS` long) and `candidate`.
pub fn compute<W: Word>(query: &[u8], candidate: &[u8]) -> Result<u32> {
    check_query(query, W::BITS)?;
    check_candidate(0, candidate, u32::MAX as usize)?;
    if query.is_empty() {
        return Ok(candidate.len() as u32);
    }

    let profile = profile::<W>(query);
    let last = W::one() << (query.len() - 1);
    let mut vp = W::max_value();
    let mut vn = W::zero();
    let mut score = query.len() as u32;

    for &c in candidate {
        let (hp, hn) = compute_block(&mut vp, &mut vn, profile[rank_unchecked(c)]);
        match delta(hp, hn, last) {
            (true, _) => score += 1,
            (_, true) => score -= 1,
            _ => {}
        }
    }
    Ok(score)
}

/// Queries up to 64 characters.
pub fn myers_64x1(query: &[u8], candidate: &[u8]) -> Result<u32> {
    compute::<u64>(query, candidate)
}

/// Queries up to 128 characters.
pub fn myers_128x1(query: &[u8], candidate: &[u8]) -> Result<u32> {
    compute::<u128>(query, candidate)
}

//! Kernel inputs and their contract checks.
use crate::{
    alphabet,
    error::{Error, Result, WordKind},
};

/// One query and `N` candidates, one per lane.
///
/// Lengths are taken from the slices; nothing is read past the end of a
/// candidate, so candidates of different lengths need no padding.
#[derive(Clone, Copy, Debug)]
pub struct BatchInput<'a, const N: usize> {
    pub query: &'a [u8],
    pub candidates: [&'a [u8]; N],
}

pub type Input8x16<'a> = BatchInput<'a, 16>;
pub type Input16x8<'a> = BatchInput<'a, 8>;
pub type Input32x4<'a> = BatchInput<'a, 4>;
pub type Input64x2<'a> = BatchInput<'a, 2>;

impl<'a, const N: usize> BatchInput<'a, N> {
    pub fn new(query: &'a [u8], candidates: [&'a [u8]; N]) -> Self {
        Self { query, candidates }
    }

    /// Length of the longest candidate, i.e. the number of automaton steps.
    pub fn max_len(&self) -> usize {
        self.candidates.iter().map(|c| c.len()).max().unwrap_or(0)
    }
}

/// The query must consist of letters and fit in `max` bits.
pub(crate) fn check_query(query: &[u8], max: usize) -> Result<()> {
    if query.len() > max {
        return Err(Error::QueryTooLong {
            len: query.len(),
            max,
        });
    }
    alphabet::validate(query, WordKind::Query)
}

/// The candidate must consist of letters and its length must be at most `max`.
pub(crate) fn check_candidate(lane: usize, candidate: &[u8], max: usize) -> Result<()> {
    if candidate.len() > max {
        return Err(Error::CandidateTooLong {
            lane,
            len: candidate.len(),
            max,
        });
    }
    alphabet::validate(candidate, WordKind::Candidate(lane))
}

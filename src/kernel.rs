//! Running an explicitly chosen kernel over a list of candidates of any size.
//!
//! Nothing here picks a kernel for the caller: the list is cut into batches of
//! the chosen kernel's lane count, and the last batch is padded with empty
//! candidates whose results are dropped.
use std::{array::from_fn, fmt};

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    anyx1::{self, myers_anyx1},
    batch,
    error::{Error, Result},
    input::BatchInput,
    scalar::{myers_128x1, myers_64x1},
    word::Word,
};

/// The available kernels, named `{lane bits}x{lanes}`.
#[derive(Debug, PartialEq, Eq, Default, Clone, Copy, ValueEnum, Serialize, Deserialize)]
pub enum Kernel {
    #[value(name = "8x16")]
    #[serde(rename = "8x16")]
    Lanes8x16,
    #[default]
    #[value(name = "16x8")]
    #[serde(rename = "16x8")]
    Lanes16x8,
    #[value(name = "32x4")]
    #[serde(rename = "32x4")]
    Lanes32x4,
    #[value(name = "64x2")]
    #[serde(rename = "64x2")]
    Lanes64x2,
    #[value(name = "64x1")]
    #[serde(rename = "64x1")]
    Scalar64,
    #[value(name = "128x1")]
    #[serde(rename = "128x1")]
    Scalar128,
    /// Arbitrary precision.
    #[value(name = "anyx1")]
    #[serde(rename = "anyx1")]
    Any,
}

impl Kernel {
    /// Number of candidates per call.
    pub fn lanes(&self) -> usize {
        match self {
            Kernel::Lanes8x16 => 16,
            Kernel::Lanes16x8 => 8,
            Kernel::Lanes32x4 => 4,
            Kernel::Lanes64x2 => 2,
            Kernel::Scalar64 | Kernel::Scalar128 | Kernel::Any => 1,
        }
    }

    /// Longest supported query.
    pub fn max_query_len(&self) -> usize {
        match self {
            Kernel::Lanes8x16 => 8,
            Kernel::Lanes16x8 => 16,
            Kernel::Lanes32x4 => 32,
            Kernel::Lanes64x2 | Kernel::Scalar64 => 64,
            Kernel::Scalar128 => 128,
            Kernel::Any => anyx1::MAX_LEN,
        }
    }

    /// Longest supported candidate: the lane's length field, capped by the
    /// `u32` result.
    pub fn max_candidate_len(&self) -> usize {
        match self {
            Kernel::Lanes8x16 => u8::MAX_LEN,
            Kernel::Lanes16x8 => u16::MAX_LEN,
            Kernel::Any => anyx1::MAX_LEN,
            _ => u32::MAX_LEN,
        }
    }
}

impl fmt::Display for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(v) => write!(f, "{}", v.get_name()),
            None => write!(f, "{self:?}"),
        }
    }
}

/// Distance from `query` to each of `candidates`, using `kernel`.
pub fn scan(kernel: Kernel, query: &[u8], candidates: &[&[u8]]) -> Result<Vec<u32>> {
    debug!(
        "scan: {} candidates in batches of {} with kernel {kernel}",
        candidates.len(),
        kernel.lanes()
    );
    match kernel {
        Kernel::Lanes8x16 => scan_batches::<u8, 16>(query, candidates, kernel),
        Kernel::Lanes16x8 => scan_batches::<u16, 8>(query, candidates, kernel),
        Kernel::Lanes32x4 => scan_batches::<u32, 4>(query, candidates, kernel),
        Kernel::Lanes64x2 => scan_batches::<u64, 2>(query, candidates, kernel),
        Kernel::Scalar64 => scan_single(myers_64x1, query, candidates),
        Kernel::Scalar128 => scan_single(myers_128x1, query, candidates),
        Kernel::Any => scan_single(myers_anyx1, query, candidates),
    }
}

/// The candidates within distance `k` of `query`, as `(index, distance)`.
pub fn within(
    kernel: Kernel,
    query: &[u8],
    candidates: &[&[u8]],
    k: u32,
) -> Result<Vec<(usize, u32)>> {
    Ok(scan(kernel, query, candidates)?
        .into_iter()
        .enumerate()
        .filter(|&(_, d)| d <= k)
        .collect())
}

fn scan_batches<W: Word, const N: usize>(
    query: &[u8],
    candidates: &[&[u8]],
    kernel: Kernel,
) -> Result<Vec<u32>> {
    let max = kernel.max_candidate_len();
    let mut distances = Vec::with_capacity(candidates.len());
    for (b, chunk) in candidates.chunks(N).enumerate() {
        let offset = b * N;
        // Results are returned as `u32`, even when the length field is wider.
        if let Some((lane, c)) = chunk.iter().enumerate().find(|(_, c)| c.len() > max) {
            return Err(Error::CandidateTooLong {
                lane: offset + lane,
                len: c.len(),
                max,
            });
        }
        let input = BatchInput::new(query, from_fn(|k| chunk.get(k).copied().unwrap_or_default()));
        let d = batch::compute::<W, N>(&input).map_err(|e| e.at_offset(offset))?;
        distances.extend(d[..chunk.len()].iter().map(|d| d.as_usize() as u32));
    }
    Ok(distances)
}

fn scan_single(
    f: fn(&[u8], &[u8]) -> Result<u32>,
    query: &[u8],
    candidates: &[&[u8]],
) -> Result<Vec<u32>> {
    candidates
        .iter()
        .enumerate()
        .map(|(i, c)| f(query, c).map_err(|e| e.at_offset(i)))
        .collect()
}

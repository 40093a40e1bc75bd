//! Error types returned by all kernels.

use std::{collections::TryReserveError, fmt};

use thiserror::Error;

/// Which input word an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordKind {
    Query,
    /// The candidate in the given lane (or position in a candidate list).
    Candidate(usize),
}

impl fmt::Display for WordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordKind::Query => write!(f, "query"),
            WordKind::Candidate(i) => write!(f, "candidate {i}"),
        }
    }
}

/// Errors that can occur when computing distances.
///
/// Every variant except the scratch ones is an input contract violation and is
/// detected before any automaton work is done.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A byte outside `'a'..='z'`.
    #[error("{word} has byte {byte:#04x} at position {pos}, outside 'a'..='z'")]
    InvalidByte { word: WordKind, pos: usize, byte: u8 },

    /// The query does not fit in one lane word of the kernel.
    #[error("query has length {len}, but this kernel supports at most {max}")]
    QueryTooLong { len: usize, max: usize },

    /// The candidate length (and hence its distance) does not fit the
    /// kernel's length field.
    #[error("candidate {lane} has length {len}, but this kernel supports at most {max}")]
    CandidateTooLong { lane: usize, len: usize, max: usize },

    /// The scratch region of the arbitrary-precision kernel could not be
    /// reserved.
    #[error("could not allocate {bytes} bytes of scratch space")]
    ScratchAlloc {
        bytes: usize,
        #[source]
        source: TryReserveError,
    },

    /// The scratch region size for words of this length overflows `usize`.
    #[error("scratch space for words of length {len} overflows the address space")]
    ScratchOverflow { len: usize },
}

/// A specialized `Result` type for distance computations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Shift the lane index of a candidate error by `offset`, to turn a lane
    /// within a batch into a position in the full candidate list.
    pub(crate) fn at_offset(self, offset: usize) -> Self {
        match self {
            Error::InvalidByte {
                word: WordKind::Candidate(lane),
                pos,
                byte,
            } => Error::InvalidByte {
                word: WordKind::Candidate(lane + offset),
                pos,
                byte,
            },
            Error::CandidateTooLong { lane, len, max } => Error::CandidateTooLong {
                lane: lane + offset,
                len,
                max,
            },
            e => e,
        }
    }
}

//!
//! # Myers lanes
//!
//! Levenshtein distance of one short query against a batch of candidate
//! words, using the bit-parallel automaton of Myers'99. The crate can be used
//! in a few ways:
//! - Call a fixed-width batch kernel (`myers_8x16`, `myers_16x8`,
//!   `myers_32x4`, `myers_64x2`) on a [`BatchInput`] of exactly as many
//!   candidates as it has lanes.
//! - Call a single-candidate kernel (`myers_64x1`, `myers_128x1`, or the
//!   unbounded `myers_anyx1`).
//! - Call [`scan`] with a [`Kernel`] to run any number of candidates through
//!   the chosen kernel.
//!
//! Words consist of the lowercase letters `'a'..='z'`. Anything else, and any
//! query or candidate too long for the chosen kernel, is rejected with an
//! [`Error`] before any distance is computed.
//!

pub mod alphabet;
pub mod anyx1;
pub mod batch;
pub mod error;
pub mod input;
pub mod kernel;
pub mod myers;
pub mod profile;
pub mod scalar;
pub mod wide;
pub mod word;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(any(test, feature = "cli"))]
pub mod generate;

pub use anyx1::myers_anyx1;
pub use batch::{myers_16x8, myers_32x4, myers_64x2, myers_8x16};
pub use error::{Error, Result, WordKind};
pub use input::{BatchInput, Input16x8, Input32x4, Input64x2, Input8x16};
pub use kernel::{scan, within, Kernel};
pub use scalar::{myers_128x1, myers_64x1};

//! Random words and mutated copies of a query, for the binary and the tests.
use clap::{Parser, ValueEnum};
use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::alphabet::{ALPHABET_BASE, ALPHABET_LEN};

#[derive(ValueEnum, Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorModel {
    #[default]
    Uniform,
    /// Make a single gap (insertion or deletion) of size e*n.
    Gap,
}

#[derive(Parser, Clone, Debug, Serialize, Deserialize)]
#[clap(next_help_heading = "Generated input")]
pub struct GenerateArgs {
    /// The number of candidates to generate
    #[clap(short = 'x', long, default_value_t = 1000, display_order = 2)]
    pub cnt: usize,

    /// Length of the generated query, when none is given
    #[clap(short = 'n', long, default_value_t = 8, display_order = 3)]
    pub length: usize,

    /// Fraction of the query length that is mutated in each candidate
    #[clap(short, long, default_value_t = 0.2, display_order = 4)]
    pub error_rate: f32,

    #[clap(
        long,
        value_enum,
        default_value_t,
        value_name = "MODEL",
        hide_short_help = true
    )]
    pub error_model: ErrorModel,

    /// Seed to initialize RNG for reproducability
    #[clap(long)]
    pub seed: Option<u64>,
}

impl GenerateArgs {
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }

    /// `cnt` mutated copies of `query`.
    pub fn candidates(&self, query: &[u8], rng: &mut impl Rng) -> Vec<Vec<u8>> {
        (0..self.cnt)
            .map(|_| mutate(query, self.error_rate, self.error_model, rng))
            .collect_vec()
    }
}

enum Mutation {
    // Replace char at pos.
    Substitution(usize, u8),
    // Insert char before pos.
    Insertion(usize, u8),
    // Delete char at pos.
    Deletion(usize),
}

pub fn rand_char(rng: &mut impl Rng) -> u8 {
    ALPHABET_BASE + rng.gen_range(0..ALPHABET_LEN as u8)
}

/// A uniformly random word of `len` letters.
pub fn random_word(len: usize, rng: &mut impl Rng) -> Vec<u8> {
    (0..len).map(|_| rand_char(rng)).collect_vec()
}

fn random_mutation(len: usize, rng: &mut impl Rng) -> Mutation {
    // Substitution / insertion / deletion all with equal probability.
    // For empty words, only generate insertions.
    match if len == 0 { 1 } else { rng.gen_range(0..3usize) } {
        0 => Mutation::Substitution(rng.gen_range(0..len), rand_char(rng)),
        1 => Mutation::Insertion(rng.gen_range(0..len + 1), rand_char(rng)),
        _ => Mutation::Deletion(rng.gen_range(0..len)),
    }
}

/// A copy of `word` with `ceil(error_rate * |word|)` edits applied.
///
/// The edit distance to `word` is at most the number of edits.
pub fn mutate(word: &[u8], error_rate: f32, model: ErrorModel, rng: &mut impl Rng) -> Vec<u8> {
    let num_mutations = (error_rate * word.len() as f32).ceil() as usize;
    let mut b = word.to_vec();
    match model {
        ErrorModel::Uniform => {
            for _ in 0..num_mutations {
                match random_mutation(b.len(), rng) {
                    Mutation::Substitution(i, c) => b[i] = c,
                    Mutation::Insertion(i, c) => b.insert(i, c),
                    Mutation::Deletion(i) => {
                        b.remove(i);
                    }
                }
            }
        }
        ErrorModel::Gap => {
            if rng.gen_bool(0.5) && num_mutations <= b.len() {
                // deletion
                let start = rng.gen_range(0..=b.len() - num_mutations);
                b.drain(start..start + num_mutations);
            } else {
                // insertion
                let start = rng.gen_range(0..=b.len());
                let text = random_word(num_mutations, rng);
                b.splice(start..start, text);
            }
        }
    }
    b
}

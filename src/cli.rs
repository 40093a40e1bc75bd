use std::{io, path::PathBuf};

use clap::{value_parser, Parser};
use itertools::Itertools;
use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    generate::{random_word, GenerateArgs},
    kernel::Kernel,
};

#[derive(Parser, Serialize, Deserialize, Debug)]
#[clap(author, about)]
pub struct Cli {
    /// The kernel to run all candidates through.
    #[arg(short = 'K', long, value_enum, default_value_t)]
    pub kernel: Kernel,

    /// The query word. A random one of `--length` letters when absent.
    #[arg(short, long)]
    pub query: Option<String>,

    #[clap(flatten)]
    pub input: Input,

    /// Only report candidates within this distance of the query.
    #[arg(short = 'k', long)]
    pub max_dist: Option<u32>,

    /// Print less. Pass twice to print nothing.
    ///
    /// Do not print a line per reported candidate, but only the summary line.
    /// Pass twice to print nothing at all, e.g. for benchmarking.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub silent: u8,
}

#[derive(Parser, Serialize, Deserialize, Debug)]
#[clap(next_help_heading = "Input")]
pub struct Input {
    /// File with one candidate word per line.
    #[clap(short, long, value_parser = value_parser!(PathBuf), display_order = 1)]
    pub input: Option<PathBuf>,

    /// Options to generate candidates.
    #[clap(flatten)]
    pub generate: GenerateArgs,
}

/// Failures of the binary that are not distance errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("could not read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Distance(#[from] crate::Error),
}

impl Cli {
    /// The query and candidates to run, read from the input file or
    /// generated.
    pub fn words(&self) -> Result<(Vec<u8>, Vec<Vec<u8>>), CliError> {
        let mut rng = self.input.generate.rng();
        let query = match &self.query {
            Some(q) => q.as_bytes().to_vec(),
            None => random_word(self.input.generate.length, &mut rng),
        };
        let candidates = match &self.input.input {
            Some(path) => {
                let data = std::fs::read(path).map_err(|source| CliError::Read {
                    path: path.clone(),
                    source,
                })?;
                let words = parse_words(&data);
                info!("Read {} candidates from {}", words.len(), path.display());
                words
            }
            None => self.input.generate.candidates(&query, &mut rng),
        };
        Ok((query, candidates))
    }
}

/// One word per non-blank line, without surrounding whitespace.
fn parse_words(data: &[u8]) -> Vec<Vec<u8>> {
    data.split(|&c| c == b'\n')
        .map(|l| l.trim_ascii())
        .filter(|l| !l.is_empty())
        .map(|l| l.to_vec())
        .collect_vec()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn words_per_line() {
        assert_eq!(
            parse_words(b"hello\r\nworld\n\n  help \nx"),
            vec![b"hello".to_vec(), b"world".to_vec(), b"help".to_vec(), b"x".to_vec()]
        );
        assert!(parse_words(b"\n\n").is_empty());
    }

    #[test]
    fn generated_words() {
        let cli = Cli::parse_from(["myers-lanes", "--cnt", "5", "-n", "12", "--seed", "1"]);
        assert_eq!(cli.kernel, Kernel::Lanes16x8);
        let (q, c) = cli.words().unwrap();
        assert_eq!(q.len(), 12);
        assert_eq!(c.len(), 5);

        let cli = Cli::parse_from(["myers-lanes", "-q", "kitten", "-K", "anyx1", "-k", "2"]);
        assert_eq!(cli.kernel, Kernel::Any);
        assert_eq!(cli.max_dist, Some(2));
        assert_eq!(cli.words().unwrap().0, b"kitten");
    }
}

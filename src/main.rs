use std::{process::ExitCode, time::Instant};

use clap::Parser;
use itertools::Itertools;
use log::{error, info};
use myers_lanes::{
    cli::{Cli, CliError},
    scan,
};

fn run(args: &Cli) -> Result<(), CliError> {
    let (query, candidates) = args.words()?;
    let candidates = candidates.iter().map(|c| c.as_slice()).collect_vec();
    info!(
        "Query of length {}, {} candidates, kernel {}",
        query.len(),
        candidates.len(),
        args.kernel
    );

    let start = Instant::now();
    let distances = scan(args.kernel, &query, &candidates)?;
    let duration = start.elapsed();
    info!(
        "Scanned in {duration:?} ({:.1} ns per candidate)",
        duration.as_nanos() as f64 / candidates.len().max(1) as f64
    );

    let k = args.max_dist.unwrap_or(u32::MAX);
    let mut reported = 0;
    for (c, d) in candidates.iter().zip(&distances) {
        if *d > k {
            continue;
        }
        reported += 1;
        if args.silent == 0 {
            println!("{}\t{d}", String::from_utf8_lossy(c));
        }
    }
    if args.silent <= 1 {
        eprintln!(
            "{}: {reported}/{} candidates reported",
            String::from_utf8_lossy(&query),
            candidates.len()
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Cli::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

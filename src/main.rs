use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use markovish_text::cli::Cli;
use markovish_text::generator;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, Level};

fn run(cli: &Cli) -> Result<()> {
    let corpus = io::read_to_string(io::stdin()).context("Error: failed to read standard input")?;
    debug!(bytes = corpus.len(), end = cli.end, "read corpus");

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let sentence = generator::generate(&corpus, &cli.generator_config(), &mut rng)?;
    println!("{}", sentence.as_str().unwrap_or_default());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(Level::from(cli.log_level))
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

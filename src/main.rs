//! Command line boggle solver.
//!
//! `boggle <dictionary_filename> <board_filename> <output_filename>`
//!
//! Reads the dictionary and the board, finds all words and writes them to the output
//! file in alphabetical order, one per line.

use anyhow::{Context, Result};
use boggle_solver::{write_words, Board, Config, Dictionary, Solver, USAGE};
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(config: &Config) -> Result<()> {
    let t0 = Instant::now();
    let mut dictionary = Dictionary::from_file(&config.dictionary_path)
        .context("Failed to learn the dictionary")?;
    let mut board =
        Board::from_file(&config.board_path).context("Failed to read the board")?;

    let solver = Solver::new().with_unlearn(config.unlearn);
    let mut sheet = solver.solve(&mut board, &mut dictionary);
    let words = sheet.finalize();
    tracing::info!("Found {} words in {:?}", words.len(), t0.elapsed());

    write_words(&config.output_path, words).context("Failed to write the words")?;
    eprintln!("{} words written to {}", words.len(), config.output_path);
    Ok(())
}

fn main() {
    let config = match Config::from_env(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}\n{}", err, USAGE);
            std::process::exit(1);
        }
    };
    init_tracing(&config.log_filter);

    if let Err(err) = run(&config) {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }
}

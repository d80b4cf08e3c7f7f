use anyhow::Result;
use boggle_solver::{Board, Dictionary, Solver};
use std::time::Instant;

/// Shake a random board and solve it with the dictionary given as first argument.
fn run() -> Result<()> {
    let wordfile = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("wordlists/words.txt"));
    let t0 = Instant::now();
    let mut dictionary = Dictionary::from_file(&wordfile)?;
    println!("{} took {:?}", dictionary, t0.elapsed());

    let mut board = Board::random(&mut rand::thread_rng());
    println!("{}\n", board);

    let t0 = Instant::now();
    let (mut sheet, stats) = Solver::new().solve_with_stats(&mut board, &mut dictionary);
    let dt = t0.elapsed();
    let words = sheet.finalize();
    println!(
        "{} words in {:?} ({} pairs, {} candidates)",
        words.len(),
        dt,
        stats.pairs,
        stats.candidates
    );
    for word in words {
        println!("{}", word);
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
    }
}

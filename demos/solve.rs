use anyhow::Result;
use boggle_solver::{Board, Dictionary, Solver};

const BOARD: &[&str] = &["PWYR", "ENTH", "GSIQ", "OLSA"];
const WORDS: &[&str] = &[
    "pen", "peg", "quit", "hit", "slit", "slits", "nest", "sent", "its", "sit", "tens", "yet",
];

fn run() -> Result<()> {
    let mut board = Board::from_strings(BOARD)?;
    let mut dictionary = Dictionary::from_words(WORDS);
    println!("{}\n", board);
    let mut sheet = Solver::new().solve(&mut board, &mut dictionary);
    for word in sheet.finalize() {
        println!("{}", word);
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
    }
}

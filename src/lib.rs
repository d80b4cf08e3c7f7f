//! A boggle solver for Rust.
//! <br>
//! This crate finds all the words from a dictionary that can be spelled on a 4x4
//! boggle board. Words are formed by starting at any tile and moving to an adjacent
//! tile (up, down, left, right or diagonal), using every tile at most once. Words must be
//! at least 3 letters long, and a "q" on the board always stands for "qu".
//!
//! # How to use `boggle_solver`
//! Create a [`Board`](crate::Board) from 4 rows of 4 letters and a
//! [`Dictionary`](crate::Dictionary) from a list of words (or a file with one word per line).
//! A [`Solver`](crate::Solver) then traces the dictionary words over the board, and jots
//! the words it finds on a [`Scoresheet`](crate::Scoresheet).
//!
//! # Basic usage
//!  ```
//! # use boggle_solver::{Board, Dictionary, Error, Solver};
//! let mut board = Board::from_strings(&["PWYR", "ENTH", "GSIQ", "OLSA"])?;
//! let mut dictionary = Dictionary::from_words(&["pen", "peg", "quit", "hit", "slit", "slits"]);
//! let mut sheet = Solver::new().solve(&mut board, &mut dictionary);
//! for word in sheet.finalize() {
//!     println!("{}", word);
//! }
//! # Ok::<(), Error>(())
//! ```
mod board;
mod config;
mod dictionary;
mod error;
mod output;
mod scoresheet;
mod search;

pub use crate::board::{Board, Considered, Neighbors, Tile, DICE, N};
pub use crate::config::{Config, DEFAULT_LOG_FILTER, USAGE};
pub use crate::dictionary::{
    Candidates, Dictionary, LoadStats, MAX_CHECKED_WORD_LEN, MIN_WORD_LEN, PREFIX_LEN,
};
pub use crate::error::Error;
pub use crate::output::write_words;
pub use crate::scoresheet::Scoresheet;
pub use crate::search::{SearchStats, Solver};

mod dice;
mod tile;

pub use self::dice::DICE;
pub use self::tile::{Neighbors, Tile};
use crate::Error;
use rand::Rng;
use std::fmt;
use std::fs::read_to_string;
use std::ops::{Deref, DerefMut};

/// The dimension of the boggle board: N x N tiles
pub const N: usize = 4;

type Tiles = [Tile; N * N];

/// Display the board as 4 lines of 4 letters.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = self
            .tiles
            .chunks(N)
            .map(|row| {
                row.iter()
                    .map(|tile| format!("{:<2}", tile.to_string()))
                    .collect::<Vec<String>>()
                    .join(" ")
                    .trim_end()
                    .to_string()
            })
            .collect::<Vec<String>>()
            .join("\n");
        write!(f, "{}", repr)
    }
}

/// A 4x4 boggle board.
///
/// The tiles are stored in row-major order, each tile holding the indices of its
/// adjacent tiles. Apart from the search state of the tiles the board does not change
/// after it is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    tiles: Tiles,
}

impl Board {
    /// Create a board from 4 rows of 4 letters.
    /// ## Errors
    /// If `rows` has wrong dimensions, or contains a character that is not a letter.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Board, Error};
    /// let board = Board::from_strings(&["pwyr", "enth", "gsiq", "olsa"])?;
    /// assert_eq!(board.tiles().count(), 16);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_strings<S: AsRef<str>>(rows: &[S]) -> Result<Board, Error> {
        let mut board = Board::default();
        board.set(rows)?;
        Ok(board)
    }

    /// Set the board from 4 rows of 4 letters, and returns the modified board.
    /// ## Errors
    /// See [`set`](Board::set).
    pub fn with_rows<S: AsRef<str>>(mut self, rows: &[S]) -> Result<Board, Error> {
        self.set(rows)?;
        Ok(self)
    }

    /// Read the board from a file with 4 lines of 4 letters.
    ///
    /// Characters that are not letters (like whitespace) are ignored, and so are lines
    /// without letters. Letters may be upper or lower case.
    /// ## Errors
    /// If the file can not be read, or does not describe a 4x4 board.
    pub fn from_file(boardfile: &str) -> Result<Board, Error> {
        let rows: Vec<String> = read_to_string(boardfile)
            .map_err(|source| Error::ReadError {
                path: String::from(boardfile),
                source,
            })?
            .lines()
            .map(|line| line.chars().filter(|c| c.is_alphabetic()).collect::<String>())
            .filter(|row| !row.is_empty())
            .collect();
        let board = Board::from_strings(&rows)?;
        tracing::info!("Read board from '{}':\n{}", boardfile, board);
        Ok(board)
    }

    /// Create a random board by shaking the standard set of boggle dice.
    /// ## Example
    /// ```
    /// use boggle_solver::Board;
    /// let board = Board::random(&mut rand::thread_rng());
    /// println!("{}", board);
    /// ```
    pub fn random<R: Rng>(rng: &mut R) -> Board {
        let letters = dice::roll(rng);
        let rows: Vec<String> = letters
            .chunks(N)
            .map(|row| row.iter().collect::<String>())
            .collect();
        // Dice faces are all letters, so this can't fail
        Board::from_strings(&rows).unwrap_or_default()
    }

    /// Replace the board with new tiles from 4 rows of 4 letters, and wire up the
    /// adjacency between them. On error the board is not modified.
    /// ## Errors
    /// - [`InvalidRowCount`](Error::InvalidRowCount) if there are not exactly 4 rows.
    /// - [`InvalidRowLength`](Error::InvalidRowLength) if a row does not have 4 characters.
    /// - [`InvalidLetter`](Error::InvalidLetter) if a character is not a letter.
    pub fn set<S: AsRef<str>>(&mut self, rows: &[S]) -> Result<(), Error> {
        if rows.len() != N {
            return Err(Error::InvalidRowCount(rows.len()));
        }
        let mut tiles = Tiles::default();
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let len = row.chars().count();
            if len != N {
                return Err(Error::InvalidRowLength(String::from(row), len));
            }
            for (j, letter) in row.chars().enumerate() {
                tiles[i * N + j] = Tile::new(letter)?;
            }
        }
        for (index, tile) in tiles.iter_mut().enumerate() {
            tile.neighbors = adjacent(index);
        }
        self.tiles = tiles;
        Ok(())
    }

    /// Iterate over all tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Return the tile with row-major `index`.
    pub fn tile(&self, index: usize) -> &Tile {
        &self.tiles[index]
    }

    /// Return the tile at `row`, `col`, or None if outside the board.
    pub fn tile_at(&self, row: usize, col: usize) -> Option<&Tile> {
        if row < N && col < N {
            return Some(&self.tiles[row * N + col]);
        }
        None
    }

    /// The indices of the tiles adjacent to tile `index`.
    pub fn neighbors(&self, index: usize) -> Neighbors {
        self.tiles[index].neighbors
    }

    /// The letters of the current search path ending in tile `tail`, found by
    /// following the chain of previous tiles back to the start of the path.
    pub fn path_fragment(&self, tail: usize) -> String {
        let mut fragments = Vec::with_capacity(N * N);
        let mut current = Some(tail);
        while let Some(index) = current {
            let tile = &self.tiles[index];
            fragments.push(tile.fragment());
            current = tile.previous;
            if fragments.len() > N * N {
                break;
            }
        }
        fragments.reverse();
        fragments.concat()
    }

    /// Add tile `index` to the current search path, after tile `previous`.
    ///
    /// The tile is forgotten (removed from the path) when the returned guard is dropped,
    /// so the board is always restored when a search step returns.
    pub fn consider(&mut self, index: usize, previous: Option<usize>) -> Considered<'_> {
        let tile = &mut self.tiles[index];
        tile.in_use = true;
        tile.previous = previous;
        Considered { board: self, index }
    }

    fn forget(&mut self, index: usize) {
        let tile = &mut self.tiles[index];
        tile.in_use = false;
        tile.previous = None;
    }
}

/// Return the row-major indices of the tiles adjacent to `index`, including diagonals.
fn adjacent(index: usize) -> Neighbors {
    let (row, col) = (index / N, index % N);
    let mut neighbors = Neighbors::new();
    for r in row.saturating_sub(1)..=(row + 1).min(N - 1) {
        for c in col.saturating_sub(1)..=(col + 1).min(N - 1) {
            if (r, c) != (row, col) {
                neighbors.push(r * N + c);
            }
        }
    }
    neighbors
}

/// A tile that is part of the current search path.
///
/// Derefs to the [`Board`], so the search can be extended from it. Dropping the guard
/// removes the tile from the path again.
#[derive(Debug)]
pub struct Considered<'a> {
    board: &'a mut Board,
    index: usize,
}

impl<'a> Considered<'a> {
    /// The index of the considered tile.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<'a> Deref for Considered<'a> {
    type Target = Board;
    fn deref(&self) -> &Self::Target {
        self.board
    }
}

impl<'a> DerefMut for Considered<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.board
    }
}

impl<'a> Drop for Considered<'a> {
    fn drop(&mut self) {
        self.board.forget(self.index);
    }
}

use crate::error::Error;
use std::fmt;
use tinyvec::ArrayVec;

/// Indices of the (at most 8) tiles adjacent to a tile.
pub type Neighbors = ArrayVec<[usize; 8]>;

/// The string each letter contributes to a word. A 'q' always stands for "qu".
const FRAGMENTS: [&str; 26] = [
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "qu", "r",
    "s", "t", "u", "v", "w", "x", "y", "z",
];

/// One cell of the board.
///
/// Besides its letter a tile knows its neighbors, and carries the state of the
/// current search path: whether it is in use, and which tile precedes it.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Tile {
    letter: char,
    fragment: &'static str,
    pub(super) neighbors: Neighbors,
    pub(super) in_use: bool,
    pub(super) previous: Option<usize>,
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.letter {
            'Q' => write!(f, "Qu"),
            letter => write!(f, "{}", letter),
        }
    }
}

impl Tile {
    /// Create a tile for `letter`, which may be upper or lower case.
    /// ## Errors
    /// If `letter` is not in 'a'..='z' or 'A'..='Z'.
    pub fn new(letter: char) -> Result<Tile, Error> {
        if !letter.is_ascii_alphabetic() {
            return Err(Error::InvalidLetter(letter));
        }
        let letter = letter.to_ascii_uppercase();
        Ok(Tile {
            letter,
            fragment: FRAGMENTS[(letter as u8 - b'A') as usize],
            ..Tile::default()
        })
    }

    /// The upper case letter shown on the tile.
    pub fn letter(&self) -> char {
        self.letter
    }

    /// The lower case string this tile contributes to a word.
    pub fn fragment(&self) -> &'static str {
        self.fragment
    }

    /// Indices of the adjacent tiles, in row-major order.
    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }

    /// Check if the tile is part of the current search path.
    pub fn is_in_use(&self) -> bool {
        self.in_use
    }

    /// The tile before this one on the current search path.
    pub fn previous(&self) -> Option<usize> {
        self.previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment() -> Result<(), Error> {
        assert_eq!(Tile::new('P')?.fragment(), "p");
        assert_eq!(Tile::new('e')?.fragment(), "e");
        assert_eq!(Tile::new('Q')?.fragment(), "qu");
        assert_eq!(Tile::new('q')?.fragment(), "qu");
        Ok(())
    }

    #[test]
    fn test_display() -> Result<(), Error> {
        assert_eq!(Tile::new('w')?.to_string(), "W");
        assert_eq!(Tile::new('q')?.to_string(), "Qu");
        Ok(())
    }

    #[test]
    fn test_invalid_letter() {
        assert!(matches!(Tile::new('4'), Err(Error::InvalidLetter('4'))));
        assert!(matches!(Tile::new('é'), Err(Error::InvalidLetter('é'))));
    }

    #[test]
    fn test_new_tile_is_free() -> Result<(), Error> {
        let tile = Tile::new('a')?;
        assert!(!tile.is_in_use());
        assert_eq!(tile.previous(), None);
        assert!(tile.neighbors().is_empty());
        Ok(())
    }
}

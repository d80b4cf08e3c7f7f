use rand::seq::SliceRandom;
use rand::Rng;

/// The 16 dice of a standard boggle set. The 'Q' face reads as "Qu".
pub const DICE: [&str; 16] = [
    "AAEEGN", "ABBJOO", "ACHOPS", "AFFKPS", "AOOTTW", "CIMOTU", "DEILRX", "DELRVY", "DISTTY",
    "EEGHNW", "EEINSU", "EHRTVW", "EIOSST", "ELRTTY", "HIMNQU", "HLNNRZ",
];

/// Shake the dice: shuffle them over the grid and roll each one.
/// Returns the 16 rolled letters in row-major order.
pub fn roll<R: Rng>(rng: &mut R) -> [char; 16] {
    let mut dice = DICE;
    dice.shuffle(rng);
    let mut letters = ['A'; 16];
    for (letter, die) in letters.iter_mut().zip(dice.iter()) {
        let faces = die.as_bytes();
        *letter = faces[rng.gen_range(0..faces.len())] as char;
    }
    letters
}

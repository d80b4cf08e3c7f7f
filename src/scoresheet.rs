use std::iter::FromIterator;

/// Collects the words found on a board.
///
/// Words can be jotted down as they are found, in any order and more than once.
/// [`finalize`](Scoresheet::finalize) removes the duplicates and sorts the rest.
/// Jotting supports call chaining:
/// ```
/// use boggle_solver::Scoresheet;
/// let mut sheet = Scoresheet::new();
/// sheet.jot("pen").jot("hit").jot("pen");
/// assert_eq!(sheet.count(), 3);
/// assert_eq!(sheet.finalize(), ["hit", "pen"]);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Scoresheet {
    words: Vec<String>,
}

impl Scoresheet {
    pub fn new() -> Scoresheet {
        Scoresheet::default()
    }

    /// Add a found word.
    pub fn jot<S: Into<String>>(&mut self, word: S) -> &mut Self {
        self.words.push(word.into());
        self
    }

    /// The number of words jotted down, including duplicates that are not
    /// finalized yet.
    pub fn count(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Remove duplicate words and sort the rest in ascending (byte-wise) order.
    pub fn finalize(&mut self) -> &[String] {
        let before = self.words.len();
        self.words.sort_unstable();
        self.words.dedup();
        tracing::debug!(
            "Deduped {} words: {} redundant",
            self.words.len(),
            before - self.words.len()
        );
        &self.words
    }

    /// The words jotted down so far.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

impl FromIterator<String> for Scoresheet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Scoresheet {
            words: iter.into_iter().collect(),
        }
    }
}

impl Extend<String> for Scoresheet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.words.extend(iter)
    }
}

mod candidates;

pub use self::candidates::Candidates;
use crate::Error;
use std::collections::HashMap;
use std::fmt;
use std::fs::read_to_string;

/// Words shorter than this are never stored.
pub const MIN_WORD_LEN: usize = 3;

/// Number of leading characters used as key in the prefix index.
pub const PREFIX_LEN: usize = 2;

/// Words longer than this are stored without checking the bucket for duplicates.
pub const MAX_CHECKED_WORD_LEN: usize = 16;

/// Counts returned by [`Dictionary::load`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct LoadStats {
    /// Words stored in the prefix index
    pub accepted: usize,
    /// Words dropped because they are shorter than [`MIN_WORD_LEN`]
    pub rejected: usize,
    /// Words that were already known
    pub duplicates: usize,
}

#[derive(Debug, Default, Clone)]
/// The accepted words, indexed by their first two characters.
pub struct Dictionary {
    /// Buckets of distinct words, keyed by the first [`PREFIX_LEN`] characters.
    buckets: HashMap<String, Vec<String>>,
    /// The number of words in the index
    word_count: usize,
    /// Path of the word file used to build the dictionary.
    /// Empty if the dictionary is not read from a file.
    pub wordfile: String,
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Dictionary: {} words in {} buckets from '{}'>",
            self.word_count,
            self.buckets.len(),
            self.wordfile
        )
    }
}

/// Return the first `PREFIX_LEN` characters of `s`, or None if `s` is too short.
fn prefix_key(s: &str) -> Option<&str> {
    match s.char_indices().nth(PREFIX_LEN) {
        Some((end, _)) => Some(&s[..end]),
        None if s.chars().count() == PREFIX_LEN => Some(s),
        None => None,
    }
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Dictionary {
        Dictionary::default()
    }

    /// Read the dictionary from a file. The file must be encoded in utf-8 and
    /// have one word per line.
    /// ## Errors
    /// Fails if the file can not be read.
    pub fn from_file(wordfile: &str) -> Result<Dictionary, Error> {
        let contents = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let mut dictionary = Dictionary::new();
        let stats = dictionary.load(contents.lines());
        dictionary.wordfile = String::from(wordfile);
        tracing::info!(
            accepted = stats.accepted,
            rejected = stats.rejected,
            duplicates = stats.duplicates,
            "Loaded {}",
            dictionary
        );
        Ok(dictionary)
    }

    /// Build a dictionary from a list of words.
    /// ## Example
    /// ```
    /// use boggle_solver::Dictionary;
    /// let dictionary = Dictionary::from_words(&["pen", "peg", "ox"]);
    /// assert_eq!(dictionary.len(), 2);
    /// ```
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Dictionary {
        let mut dictionary = Dictionary::new();
        dictionary.load(words.iter().map(|word| word.as_ref()));
        dictionary
    }

    /// Store every word of at least [`MIN_WORD_LEN`] characters in the prefix index.
    ///
    /// Words are trimmed and lowercased; blank lines are skipped. Shorter words are
    /// counted as rejected. Words up to [`MAX_CHECKED_WORD_LEN`] characters are
    /// only stored once; longer words are stored as given.
    pub fn load<'w, I>(&mut self, words: I) -> LoadStats
    where
        I: IntoIterator<Item = &'w str>,
    {
        let mut stats = LoadStats::default();
        for word in words.into_iter().map(str::trim) {
            if word.is_empty() {
                continue;
            }
            let word = word.to_lowercase();
            let len = word.chars().count();
            if len < MIN_WORD_LEN {
                stats.rejected += 1;
                continue;
            }
            // len >= MIN_WORD_LEN > PREFIX_LEN, so there always is a key
            let key = match prefix_key(&word) {
                Some(key) => String::from(key),
                None => continue,
            };
            let bucket = self.buckets.entry(key).or_insert_with(Vec::new);
            if len <= MAX_CHECKED_WORD_LEN && bucket.contains(&word) {
                stats.duplicates += 1;
                continue;
            }
            bucket.push(word);
            stats.accepted += 1;
        }
        self.word_count += stats.accepted;
        stats
    }

    /// Iterate over the known words that start with `prefix`.
    ///
    /// The bucket is selected with the first two characters of `prefix`, and its
    /// words are filtered on the complete prefix. A prefix shorter than two characters
    /// can not be looked up: this is logged and nothing is returned.
    /// ## Example
    /// ```
    /// use boggle_solver::Dictionary;
    /// let dictionary = Dictionary::from_words(&["quit", "quack", "quiz"]);
    /// let words: Vec<&str> = dictionary.candidates_with_prefix("qui").collect();
    /// assert_eq!(words, ["quit", "quiz"]);
    /// ```
    pub fn candidates_with_prefix<'a>(&'a self, prefix: &'a str) -> Candidates<'a> {
        match prefix_key(prefix) {
            Some(key) => Candidates::new(prefix, self.buckets.get(key).map(Vec::as_slice)),
            None => {
                tracing::warn!(
                    prefix,
                    "Prefix lookup needs at least {} characters",
                    PREFIX_LEN
                );
                Candidates::empty(prefix)
            }
        }
    }

    /// Remove `word` from its bucket. Returns true if the word was present.
    pub fn unlearn(&mut self, word: &str) -> bool {
        let buckets = &mut self.buckets;
        let removed = match prefix_key(word).and_then(|key| buckets.get_mut(key)) {
            Some(bucket) => match bucket.iter().position(|known| known == word) {
                Some(index) => {
                    bucket.remove(index);
                    true
                }
                None => false,
            },
            None => false,
        };
        if removed {
            self.word_count -= 1;
        }
        removed
    }

    /// Returns true if `word` is in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        prefix_key(word)
            .and_then(|key| self.buckets.get(key))
            .map_or(false, |bucket| bucket.iter().any(|known| known == word))
    }

    /// The number of words in the dictionary
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Check if the dictionary has no words
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// The number of distinct two character prefixes
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}

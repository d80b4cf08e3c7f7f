use std::iter::Iterator;
use std::slice::Iter;

/// Iterator over the words in one prefix bucket that start with the full prefix.
///
/// Returned by [`Dictionary::candidates_with_prefix`](crate::Dictionary::candidates_with_prefix).
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    prefix: &'a str,
    bucket: Option<Iter<'a, String>>,
}

impl<'a> Iterator for Candidates<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let prefix = self.prefix;
        self.bucket
            .as_mut()?
            .map(String::as_str)
            .find(|word| word.starts_with(prefix))
    }
}

impl<'a> Candidates<'a> {
    pub(super) fn new(prefix: &'a str, bucket: Option<&'a [String]>) -> Candidates<'a> {
        Candidates {
            prefix,
            bucket: bucket.map(|words| words.iter()),
        }
    }

    /// An iterator that yields nothing.
    pub(super) fn empty(prefix: &'a str) -> Candidates<'a> {
        Candidates::new(prefix, None)
    }
}

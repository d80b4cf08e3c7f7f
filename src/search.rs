use crate::board::{Board, N};
use crate::{Dictionary, Scoresheet};

/// Counters collected during a search.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of two tile paths that were used as dictionary prefix
    pub pairs: usize,
    /// Number of dictionary words that were tried as path on the board
    pub candidates: usize,
    /// Number of words confirmed on the board (including duplicates)
    pub found: usize,
}

/// Finds all dictionary words on a board.
///
/// Every path of two adjacent tiles is looked up in the dictionary, and each word
/// that starts with the letters of that path is traced further over the board,
/// backtracking whenever a word can not be extended.
#[derive(Debug, Copy, Clone)]
pub struct Solver {
    unlearn: bool,
}

impl Default for Solver {
    fn default() -> Self {
        Solver { unlearn: true }
    }
}

impl Solver {
    /// Create a solver that unlearns words once they are found.
    pub fn new() -> Solver {
        Solver::default()
    }

    /// Specify if found words are removed from the dictionary, so they are not
    /// traced again from another starting pair. This only saves work, the result
    /// is the same.
    #[must_use]
    pub fn with_unlearn(mut self, unlearn: bool) -> Solver {
        self.unlearn = unlearn;
        self
    }

    /// Find all words of `dictionary` on `board`.
    ///
    /// The board is restored to its unused state when this returns. If unlearning is
    /// enabled the words found are removed from `dictionary`.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Board, Dictionary, Error, Solver};
    /// let mut board = Board::from_strings(&["pwyr", "enth", "gsiq", "olsa"])?;
    /// let mut dictionary = Dictionary::from_words(&["pen", "peg", "quit", "hit", "slit", "pest"]);
    /// let mut sheet = Solver::new().solve(&mut board, &mut dictionary);
    /// assert_eq!(sheet.finalize(), ["hit", "peg", "pen", "pest", "quit", "slit"]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn solve(&self, board: &mut Board, dictionary: &mut Dictionary) -> Scoresheet {
        self.solve_with_stats(board, dictionary).0
    }

    /// Like [`solve`](Solver::solve), but also return counters of the work done.
    pub fn solve_with_stats(
        &self,
        board: &mut Board,
        dictionary: &mut Dictionary,
    ) -> (Scoresheet, SearchStats) {
        let mut sheet = Scoresheet::new();
        let mut stats = SearchStats::default();
        for first in 0..N * N {
            let mut start = board.consider(first, None);
            for second in start.neighbors(first) {
                if start.tile(second).is_in_use() {
                    continue;
                }
                let mut pair = start.consider(second, Some(first));
                stats.pairs += 1;
                let prefix = pair.path_fragment(second);
                // Copy the candidates: unlearning a word must not disturb this enumeration
                let candidates: Vec<String> = dictionary
                    .candidates_with_prefix(&prefix)
                    .map(String::from)
                    .collect();
                for word in candidates {
                    stats.candidates += 1;
                    if !extend(&mut pair, second, &word[prefix.len()..]) {
                        continue;
                    }
                    tracing::trace!(word = word.as_str(), "found");
                    stats.found += 1;
                    if self.unlearn {
                        dictionary.unlearn(&word);
                    }
                    sheet.jot(word);
                }
            }
        }
        tracing::debug!(
            pairs = stats.pairs,
            candidates = stats.candidates,
            found = stats.found,
            "Search done"
        );
        (sheet, stats)
    }
}

/// Check if `suffix` can be spelled by a path that continues from tile `tail`.
/// Tiles are only added to the path for the duration of the recursive call.
fn extend(board: &mut Board, tail: usize, suffix: &str) -> bool {
    if suffix.is_empty() {
        return true;
    }
    for next in board.neighbors(tail) {
        let tile = board.tile(next);
        if tile.is_in_use() {
            continue;
        }
        if let Some(rest) = suffix.strip_prefix(tile.fragment()) {
            let mut path = board.consider(next, Some(tail));
            if extend(&mut path, next, rest) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    type Result<T> = std::result::Result<T, Error>;

    const ABCD: &[&str] = &["abcd", "efgh", "ijkl", "mnop"];
    const PWYR: &[&str] = &["pwyr", "enth", "gsiq", "olsa"];

    fn solve(rows: &[&str], words: &[&str]) -> Result<Vec<String>> {
        let mut board = Board::from_strings(rows)?;
        let mut dictionary = Dictionary::from_words(words);
        let mut sheet = Solver::new().solve(&mut board, &mut dictionary);
        sheet.finalize();
        Ok(sheet.into_words())
    }

    #[test]
    fn test_no_path() -> Result<()> {
        // b and h are not adjacent
        assert!(solve(ABCD, &["abh"])?.is_empty());
        Ok(())
    }

    #[test]
    fn test_corner_diagonal() -> Result<()> {
        // b at (0,1) and e at (1,0) touch diagonally
        assert_eq!(solve(ABCD, &["abe"])?, ["abe"]);
        Ok(())
    }

    #[test]
    fn test_diagonal_path() -> Result<()> {
        assert_eq!(solve(ABCD, &["abf"])?, ["abf"]);
        Ok(())
    }

    #[test]
    fn test_no_tile_reuse() -> Result<()> {
        // "aba" and "abab" would need tile a twice
        assert!(solve(ABCD, &["aba", "abab", "fabf"])?.is_empty());
        Ok(())
    }

    #[test]
    fn test_long_path() -> Result<()> {
        assert_eq!(
            solve(ABCD, &["abcdhgfeijklponm", "afkp", "ponmlkjihgfedcba"])?,
            ["abcdhgfeijklponm", "afkp"]
        );
        Ok(())
    }

    #[test]
    fn test_example_board() -> Result<()> {
        let words = &[
            "pen", "peg", "quit", "hit", "slit", "slits", "sit", "its", "pet", "ten", "net",
            "gel", "nets",
        ];
        assert_eq!(
            solve(PWYR, words)?,
            ["hit", "its", "peg", "pen", "quit", "sit", "slit", "slits"]
        );
        Ok(())
    }

    #[test]
    fn test_q_is_qu() -> Result<()> {
        // the q tile at (2,3) spells "qu", never a bare "q"
        assert_eq!(solve(PWYR, &["quit", "qit", "qitt"])?, ["quit"]);
        Ok(())
    }

    #[test]
    fn test_q_pair_is_a_word() -> Result<()> {
        // two tiles starting with q already spell three letters
        assert_eq!(solve(&["qaxx", "xxxx", "xxxx", "xxxx"], &["qua", "quax"])?, ["qua", "quax"]);
        Ok(())
    }

    #[test]
    fn test_q_in_middle() -> Result<()> {
        assert_eq!(solve(&["sqax", "xxxx", "xxxx", "xxxx"], &["squa", "sqa"])?, ["squa"]);
        Ok(())
    }

    #[test]
    fn test_words_are_found_once() -> Result<()> {
        // "ala" can be spelled in several ways
        let mut board = Board::from_strings(&["alaa", "aaaa", "aaaa", "aaaa"])?;
        let mut dictionary = Dictionary::from_words(&["ala", "aaa"]);
        let sheet = Solver::new().solve(&mut board, &mut dictionary);
        assert_eq!(sheet.count(), 2);
        assert!(dictionary.is_empty());
        Ok(())
    }

    #[test]
    fn test_unlearn_does_not_change_result() -> Result<()> {
        let words = &["ala", "aaa", "laa", "aal", "alaa", "lal"];
        let rows = &["alaa", "aala", "aaaa", "laaa"];
        let mut results = Vec::new();
        for &unlearn in &[true, false] {
            let mut board = Board::from_strings(rows)?;
            let mut dictionary = Dictionary::from_words(words);
            let mut sheet = Solver::new()
                .with_unlearn(unlearn)
                .solve(&mut board, &mut dictionary);
            sheet.finalize();
            results.push(sheet.into_words());
        }
        assert_eq!(results[0], results[1]);
        assert_eq!(results[0], ["aaa", "aal", "ala", "alaa", "laa", "lal"]);
        Ok(())
    }

    #[test]
    fn test_without_unlearn_words_are_found_repeatedly() -> Result<()> {
        let mut board = Board::from_strings(&["alaa", "aaaa", "aaaa", "aaaa"])?;
        let mut dictionary = Dictionary::from_words(&["ala"]);
        let (sheet, stats) = Solver::new()
            .with_unlearn(false)
            .solve_with_stats(&mut board, &mut dictionary);
        assert!(sheet.count() > 1);
        assert_eq!(stats.found, sheet.count());
        assert_eq!(dictionary.len(), 1);
        Ok(())
    }

    #[test]
    fn test_board_is_restored() -> Result<()> {
        let mut board = Board::from_strings(PWYR)?;
        let before = board.clone();
        let mut dictionary = Dictionary::from_words(&["pen", "quit", "slits", "xyz"]);
        Solver::new().solve(&mut board, &mut dictionary);
        assert_eq!(board, before);
        assert!(board.tiles().all(|t| !t.is_in_use() && t.previous().is_none()));
        Ok(())
    }

    #[test]
    fn test_stats() -> Result<()> {
        let mut board = Board::from_strings(ABCD)?;
        let mut dictionary = Dictionary::new();
        let (sheet, stats) = Solver::new().solve_with_stats(&mut board, &mut dictionary);
        assert!(sheet.is_empty());
        // every ordered pair of adjacent tiles
        assert_eq!(stats.pairs, 84);
        assert_eq!(stats.candidates, 0);
        Ok(())
    }

    #[test]
    fn test_found_words_have_paths() -> Result<()> {
        use rand::{rngs::StdRng, SeedableRng};
        let words = &[
            "ate", "eat", "tea", "rat", "tar", "art", "star", "rats", "stare", "tears", "ten",
            "net", "nest", "sent", "tone", "note", "stone", "onset", "quiet", "quite", "sin",
        ];
        let mut rng = StdRng::seed_from_u64(2021);
        for _ in 0..20 {
            let mut board = Board::random(&mut rng);
            let mut dictionary = Dictionary::from_words(words);
            let mut sheet = Solver::new().solve(&mut board, &mut dictionary);
            for word in sheet.finalize() {
                assert!(words.contains(&word.as_str()));
                assert!(word.len() >= 3);
                assert!(has_path(&board, word), "{} on\n{}", word, board);
            }
        }
        Ok(())
    }

    /// Independent brute force check that `word` is spelled by a simple path.
    fn has_path(board: &Board, word: &str) -> bool {
        fn walk(board: &Board, at: usize, rest: &str, used: &mut Vec<usize>) -> bool {
            let rest = match rest.strip_prefix(board.tile(at).fragment()) {
                Some(rest) => rest,
                None => return false,
            };
            if rest.is_empty() {
                return true;
            }
            used.push(at);
            let free: Vec<usize> = board
                .neighbors(at)
                .into_iter()
                .filter(|next| !used.contains(next))
                .collect();
            let found = free.into_iter().any(|next| walk(board, next, rest, used));
            used.pop();
            found
        }
        (0..N * N).any(|start| walk(board, start, word, &mut Vec::new()))
    }
}

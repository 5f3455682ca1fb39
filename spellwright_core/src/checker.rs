//! Top-level façade: owns a lexicon, a tokenizer and a suggester, and
//! exposes the spell-checking operations a front end actually needs
//! (check a word, check a document or file, load/save a dictionary).

use std::path::Path;

use crate::error::CheckerError;
use crate::lexicon::Lexicon;
use crate::suggester::{Suggester, SuggesterConfig, Suggestion};
use crate::tokenizer::{Tokenizer, TokenizerConfig};

/// Bundles the tokenizer and suggester knobs so a front end can build one
/// from a config file without reaching into either sub-module directly.
#[derive(Debug, Clone, Default)]
pub struct CheckerConfig {
    pub tokenizer: TokenizerConfig,
    pub suggester: SuggesterConfig,
}

pub struct Checker {
    lexicon: Lexicon,
    tokenizer: Tokenizer,
    suggester: Suggester,
}

impl Checker {
    pub fn new(config: CheckerConfig) -> Self {
        Checker {
            lexicon: Lexicon::new(),
            tokenizer: Tokenizer::new(config.tokenizer),
            suggester: Suggester::new(config.suggester),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn lexicon_mut(&mut self) -> &mut Lexicon {
        &mut self.lexicon
    }

    /// `true` if the word is either in the lexicon or ignorable (URL,
    /// email, number, too short) per the tokenizer's rules.
    pub fn is_correct(&self, word: &str) -> bool {
        if self.tokenizer.should_ignore(word) {
            return true;
        }
        let normalized = self.tokenizer.normalize_word(word);
        if self.lexicon.contains(&normalized) {
            return true;
        }
        // Redundant after normalization (which already lowercases unless
        // case-sensitive mode is on), but kept for symmetry with a
        // case-sensitive lexicon that also carries a lowercase entry.
        self.lexicon.contains(&normalized.to_ascii_lowercase())
    }

    pub fn suggest(&self, word: &str) -> Vec<Suggestion> {
        let normalized = self.tokenizer.normalize_word(word);
        self.suggester.suggest(&normalized, &self.lexicon)
    }

    /// Tokenizes `text` and returns every misspelled word with its byte
    /// offset into `text`, in document order.
    pub fn check_text(&self, text: &str) -> Vec<(String, usize)> {
        self.tokenizer
            .extract_words(text)
            .into_iter()
            .filter(|(word, _)| !self.is_correct(word))
            .collect()
    }

    /// Reads `path`, then returns every misspelled word with its 1-based
    /// line and column, in document order. On read failure, surfaces a
    /// [`CheckerError`] instead of a list.
    pub fn check_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<Vec<(String, usize, usize)>, CheckerError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CheckerError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self
            .tokenizer
            .extract_words_with_lines(&text)
            .into_iter()
            .filter(|(word, _, _)| !self.is_correct(word))
            .collect())
    }

    pub fn add_word(&mut self, word: &str) {
        let normalized = self.tokenizer.normalize_word(word);
        self.lexicon.add_word(&normalized);
    }

    pub fn remove_word(&mut self, word: &str) -> bool {
        let normalized = self.tokenizer.normalize_word(word);
        self.lexicon.remove_word(&normalized)
    }

    pub fn load_dictionary<P: AsRef<Path>>(&mut self, path: P) -> bool {
        self.lexicon.load_from_file(path)
    }

    pub fn save_dictionary<P: AsRef<Path>>(&self, path: P) -> Result<(), CheckerError> {
        self.lexicon.save_to_file(path)
    }

    /// `(word_count, approx_memory_bytes)` for the underlying lexicon.
    pub fn stats(&self) -> (usize, usize) {
        (self.lexicon.word_count(), self.lexicon.approx_memory_bytes())
    }
}

impl Default for Checker {
    fn default() -> Self {
        Checker::new(CheckerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker_with(words: &[&str]) -> Checker {
        let mut checker = Checker::default();
        for word in words {
            checker.add_word(word);
        }
        checker
    }

    #[test]
    fn known_word_is_correct() {
        let checker = checker_with(&["hello", "world"]);
        assert!(checker.is_correct("hello"));
        assert!(checker.is_correct("Hello"));
        assert!(!checker.is_correct("helllo"));
    }

    #[test]
    fn urls_and_short_tokens_are_always_correct() {
        let checker = Checker::default();
        assert!(checker.is_correct("https://example.com"));
        assert!(checker.is_correct("it"));
    }

    #[test]
    fn check_text_reports_byte_offsets() {
        let checker = checker_with(&["hello", "world"]);
        let misspellings = checker.check_text("hello wrold");
        assert_eq!(misspellings, vec![("wrold".to_string(), 6)]);
    }

    #[test]
    fn check_file_reports_line_and_column() {
        let checker = checker_with(&["hello", "world"]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        std::fs::write(&path, "hello world\nwrold\n").unwrap();

        let misspellings = checker.check_file(&path).unwrap();
        assert_eq!(misspellings, vec![("wrold".to_string(), 2, 1)]);
    }

    #[test]
    fn check_file_surfaces_an_error_on_missing_file() {
        let checker = Checker::default();
        assert!(checker.check_file("/nonexistent/path/doc.txt").is_err());
    }

    #[test]
    fn add_and_remove_word_round_trip() {
        let mut checker = Checker::default();
        checker.add_word("gizmo");
        assert!(checker.is_correct("gizmo"));
        assert!(checker.remove_word("gizmo"));
        assert!(!checker.is_correct("gizmo"));
    }

    #[test]
    fn dictionary_round_trips_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dict.txt");

        let mut checker = checker_with(&["alpha", "beta"]);
        checker.save_dictionary(&path).unwrap();

        let mut reloaded = Checker::default();
        assert!(reloaded.load_dictionary(&path));
        assert!(reloaded.is_correct("alpha"));
        assert!(reloaded.is_correct("beta"));
    }

    #[test]
    fn stats_reports_word_count() {
        let checker = checker_with(&["alpha", "beta", "gamma"]);
        let (size, approx_memory_bytes) = checker.stats();
        assert_eq!(size, 3);
        assert!(approx_memory_bytes > 0);
    }
}

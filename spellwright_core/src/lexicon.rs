//! The word list: four cooperating indexes kept in sync on every mutation
//! so lookups never have to fall back to a linear scan.
//!
//! - `words`: exact-match membership.
//! - `frequencies`: usage counts, used by the suggester's ranking score.
//! - `trie`: prefix lookups.
//! - `phonetic_buckets`: words grouped by [`phonetic_code`], for
//!   sound-alike suggestions.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use hashbrown::{HashMap, HashSet};

use crate::error::CheckerError;
use crate::phonetic::phonetic_code;
use crate::trie::Trie;

/// Summary of the most recent [`Lexicon::load_from_file`] call, kept around
/// so a caller that wants to know about corrupt lines doesn't have to parse
/// the dictionary file itself; `load_from_file` itself still just returns
/// `bool` per the no-exceptions-for-routine-failures policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadDiagnostics {
    pub words_loaded: usize,
    pub lines_skipped: usize,
}

pub struct Lexicon {
    words: HashSet<String>,
    frequencies: HashMap<String, u64>,
    trie: Trie,
    phonetic_buckets: HashMap<String, Vec<String>>,
    last_load_diagnostics: LoadDiagnostics,
}

impl Lexicon {
    pub fn new() -> Self {
        Lexicon {
            words: HashSet::new(),
            frequencies: HashMap::new(),
            trie: Trie::new(),
            phonetic_buckets: HashMap::new(),
            last_load_diagnostics: LoadDiagnostics::default(),
        }
    }

    pub fn add_word(&mut self, word: &str) {
        self.add_word_with_frequency(word, 1);
    }

    pub fn add_word_with_frequency(&mut self, word: &str, frequency: u64) {
        if word.is_empty() {
            return;
        }
        if self.words.insert(word.to_string()) {
            self.trie.insert(word);
            self.phonetic_buckets
                .entry(phonetic_code(word))
                .or_default()
                .push(word.to_string());
        }
        self.frequencies
            .entry(word.to_string())
            .and_modify(|f| *f = (*f).max(frequency))
            .or_insert(frequency);
    }

    pub fn remove_word(&mut self, word: &str) -> bool {
        if !self.words.remove(word) {
            return false;
        }
        self.frequencies.remove(word);
        self.trie.remove(word);
        let code = phonetic_code(word);
        if let Some(bucket) = self.phonetic_buckets.get_mut(&code) {
            bucket.retain(|w| w != word);
            if bucket.is_empty() {
                self.phonetic_buckets.remove(&code);
            }
        }
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn frequency(&self, word: &str) -> u64 {
        self.frequencies.get(word).copied().unwrap_or(0)
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn all_words(&self) -> Vec<String> {
        self.words.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.words.clear();
        self.frequencies.clear();
        self.trie = Trie::new();
        self.phonetic_buckets.clear();
        self.last_load_diagnostics = LoadDiagnostics::default();
    }

    /// Collects up to `max` terminal words beneath `prefix` from the trie,
    /// then sorts that (small) subset by frequency descending, ties broken
    /// lexicographically.
    pub fn words_with_prefix(&self, prefix: &str, max: usize) -> Vec<String> {
        let mut words = self.trie.words_with_prefix(prefix, max);
        words.sort_by(|a, b| self.frequency(b).cmp(&self.frequency(a)).then_with(|| a.cmp(b)));
        words
    }

    /// Rough estimate of the bytes held across all four indexes; used by
    /// `Checker::stats` and not meant to be exact.
    pub fn approx_memory_bytes(&self) -> usize {
        let word_bytes: usize = self
            .words
            .iter()
            .map(|w| w.len() + std::mem::size_of::<String>())
            .sum();
        let frequency_bytes =
            self.frequencies.len() * (std::mem::size_of::<String>() + std::mem::size_of::<u64>());
        let phonetic_bytes: usize = self
            .phonetic_buckets
            .values()
            .map(|bucket| {
                bucket.iter().map(String::len).sum::<usize>()
                    + std::mem::size_of::<Vec<String>>()
            })
            .sum();
        let trie_bytes = self.trie.node_count() * std::mem::size_of::<usize>() * 4;
        word_bytes + frequency_bytes + phonetic_bytes + trie_bytes
    }

    pub fn phonetic_matches(&self, word: &str) -> Vec<String> {
        let code = phonetic_code(word);
        self.phonetic_buckets
            .get(&code)
            .cloned()
            .unwrap_or_default()
    }

    pub fn max_frequency(&self) -> u64 {
        self.frequencies.values().copied().max().unwrap_or(0)
    }

    pub fn last_load_diagnostics(&self) -> &LoadDiagnostics {
        &self.last_load_diagnostics
    }

    /// Loads a dictionary of `word` or `word:frequency` lines, one per line.
    /// Clears all existing state before reading, so this replaces rather
    /// than merges into whatever was previously loaded. A line that fails
    /// to parse (frequency present but not a valid integer) is skipped
    /// rather than aborting the whole load; the skip count is recorded in
    /// [`Lexicon::last_load_diagnostics`] and logged once as a summary
    /// warning.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> bool {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(f) => f,
            Err(err) => {
                tracing::warn!(?path, %err, "failed to open dictionary file");
                return false;
            }
        };
        self.clear();

        let mut words_loaded = 0usize;
        let mut lines_skipped = 0usize;
        for line in BufReader::new(file).lines() {
            let line = match line {
                Ok(l) => l,
                Err(_) => {
                    lines_skipped += 1;
                    continue;
                }
            };
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match trimmed.split_once(':') {
                Some((word, freq_str)) => match freq_str.trim().parse::<u64>() {
                    Ok(freq) => {
                        self.add_word_with_frequency(word.trim(), freq);
                        words_loaded += 1;
                    }
                    Err(_) => {
                        lines_skipped += 1;
                    }
                },
                None => {
                    self.add_word(trimmed);
                    words_loaded += 1;
                }
            }
        }

        if lines_skipped > 0 {
            tracing::warn!(
                ?path,
                lines_skipped,
                words_loaded,
                "skipped malformed dictionary lines"
            );
        }
        self.last_load_diagnostics = LoadDiagnostics {
            words_loaded,
            lines_skipped,
        };
        true
    }

    /// Writes every word as a `word:frequency` line, sorted for a stable
    /// diff-friendly file. Returns a [`CheckerError`] on I/O failure, since
    /// this is the one operation spec-marked for structured error reporting.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CheckerError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| CheckerError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        let mut words: Vec<&String> = self.words.iter().collect();
        words.sort();
        for word in words {
            let freq = self.frequency(word);
            writeln!(writer, "{word}:{freq}").map_err(|source| CheckerError::FileWrite {
                path: path.to_path_buf(),
                source,
            })?;
        }
        writer.flush().map_err(|source| CheckerError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn add_and_contains() {
        let mut lex = Lexicon::new();
        lex.add_word("hello");
        assert!(lex.contains("hello"));
        assert!(!lex.contains("goodbye"));
    }

    #[test]
    fn remove_clears_all_indexes() {
        let mut lex = Lexicon::new();
        lex.add_word_with_frequency("hello", 5);
        assert!(lex.remove_word("hello"));
        assert!(!lex.contains("hello"));
        assert_eq!(lex.frequency("hello"), 0);
        assert!(lex.phonetic_matches("hello").is_empty());
        assert!(!lex.remove_word("hello"));
    }

    #[test]
    fn frequency_tracks_the_max_seen() {
        let mut lex = Lexicon::new();
        lex.add_word_with_frequency("the", 10);
        lex.add_word_with_frequency("the", 3);
        assert_eq!(lex.frequency("the"), 10);
    }

    #[test]
    fn prefix_and_phonetic_lookups() {
        let mut lex = Lexicon::new();
        lex.add_word("robert");
        lex.add_word("rupert");
        lex.add_word("carrot");
        assert_eq!(lex.words_with_prefix("car", 10), vec!["carrot"]);
        let matches = lex.phonetic_matches("robert");
        assert!(matches.contains(&"robert".to_string()));
        assert!(matches.contains(&"rupert".to_string()));
    }

    #[test]
    fn words_with_prefix_is_sorted_by_frequency_descending() {
        let mut lex = Lexicon::new();
        lex.add_word_with_frequency("tea", 5);
        lex.add_word_with_frequency("ten", 10);
        lex.add_word_with_frequency("the", 100);
        lex.add_word_with_frequency("test", 2);
        assert_eq!(
            lex.words_with_prefix("te", 5),
            vec!["ten".to_string(), "tea".to_string(), "test".to_string()]
        );
    }

    #[test]
    fn all_words_matches_contains() {
        let mut lex = Lexicon::new();
        lex.add_word("alpha");
        lex.add_word("beta");
        let all = lex.all_words();
        assert_eq!(all.len(), 2);
        for word in &all {
            assert!(lex.contains(word));
        }
    }

    #[test]
    fn clear_empties_every_index() {
        let mut lex = Lexicon::new();
        lex.add_word_with_frequency("alpha", 7);
        lex.clear();
        assert_eq!(lex.word_count(), 0);
        assert!(lex.all_words().is_empty());
        assert!(!lex.contains("alpha"));
        assert_eq!(lex.frequency("alpha"), 0);
        assert!(lex.words_with_prefix("al", 5).is_empty());
    }

    #[test]
    fn load_from_file_replaces_rather_than_merges() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "fresh:1").unwrap();
        file.flush().unwrap();

        let mut lex = Lexicon::new();
        lex.add_word("stale");
        assert!(lex.load_from_file(file.path()));
        assert!(!lex.contains("stale"));
        assert!(lex.contains("fresh"));
    }

    #[test]
    fn load_from_file_skips_malformed_lines_without_failing() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "hello:5").unwrap();
        writeln!(file, "world").unwrap();
        writeln!(file, "broken:notanumber").unwrap();
        writeln!(file).unwrap();
        file.flush().unwrap();

        let mut lex = Lexicon::new();
        assert!(lex.load_from_file(file.path()));
        assert!(lex.contains("hello"));
        assert_eq!(lex.frequency("hello"), 5);
        assert!(lex.contains("world"));
        assert!(!lex.contains("broken"));
        assert_eq!(lex.last_load_diagnostics().words_loaded, 2);
        assert_eq!(lex.last_load_diagnostics().lines_skipped, 1);
    }

    #[test]
    fn load_from_file_missing_file_returns_false() {
        let mut lex = Lexicon::new();
        assert!(!lex.load_from_file("/nonexistent/path/dictionary.txt"));
    }

    #[test]
    fn save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dict.txt");

        let mut lex = Lexicon::new();
        lex.add_word_with_frequency("alpha", 7);
        lex.add_word_with_frequency("beta", 2);
        lex.save_to_file(&path).unwrap();

        let mut reloaded = Lexicon::new();
        assert!(reloaded.load_from_file(&path));
        assert_eq!(reloaded.frequency("alpha"), 7);
        assert_eq!(reloaded.frequency("beta"), 2);
    }
}

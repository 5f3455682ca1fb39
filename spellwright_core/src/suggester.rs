//! Generates and ranks correction candidates for a misspelled word.
//!
//! Candidates come from seven generators (deletions, insertions,
//! substitutions, transpositions, splits, phonetic matches, prefix matches).
//! The edit-based generators are filtered down to lexicon members before
//! scoring; phonetic and prefix candidates are lexicon members by
//! construction. Splits are validated word-by-word at generation time, so
//! they skip the generic lexicon filter (a two-word candidate can never
//! itself be "in the lexicon" as a single entry).

use crate::edit_distance::{damerau_levenshtein, levenshtein};
use crate::lexicon::Lexicon;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Prefix-candidate lookups always ask the lexicon for at most this many
/// words per prefix length, per the fixed generator definition.
const PREFIX_LOOKUP_LIMIT: usize = 20;

/// Weights and caps for candidate generation and the fused ranking score.
/// The length-ratio term is fixed at 0.10 in the formula itself (see
/// [`Suggester::score`]), not configurable.
#[derive(Debug, Clone)]
pub struct SuggesterConfig {
    max_suggestions: usize,
    max_edit_distance: usize,
    edit_distance_weight: f64,
    frequency_weight: f64,
    phonetic_weight: f64,
    prefix_weight: f64,
}

impl Default for SuggesterConfig {
    fn default() -> Self {
        SuggesterConfig {
            max_suggestions: 10,
            max_edit_distance: 2,
            edit_distance_weight: 1.0,
            frequency_weight: 0.5,
            phonetic_weight: 0.3,
            prefix_weight: 0.2,
        }
    }
}

impl SuggesterConfig {
    pub fn set_max_suggestions(&mut self, value: usize) {
        self.max_suggestions = value;
    }

    pub fn set_max_edit_distance(&mut self, value: usize) {
        self.max_edit_distance = value;
    }

    pub fn set_edit_distance_weight(&mut self, value: f64) {
        self.edit_distance_weight = value;
    }

    pub fn set_frequency_weight(&mut self, value: f64) {
        self.frequency_weight = value;
    }

    /// Stored for callers that build on top of the default ranker; like the
    /// keyboard-distance helper, it is not consulted by [`Suggester::score`]
    /// itself.
    pub fn set_phonetic_weight(&mut self, value: f64) {
        self.phonetic_weight = value;
    }

    pub fn set_prefix_weight(&mut self, value: f64) {
        self.prefix_weight = value;
    }
}

/// A ranked correction candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub word: String,
    pub score: f64,
    pub edit_distance: usize,
}

pub struct Suggester {
    config: SuggesterConfig,
}

impl Suggester {
    pub fn new(config: SuggesterConfig) -> Self {
        Suggester { config }
    }

    pub fn config(&self) -> &SuggesterConfig {
        &self.config
    }

    /// Full candidate-generation-then-ranking pipeline. Not bounded by
    /// `max_edit_distance`: that cap only applies to
    /// [`Suggester::edit_distance_suggestions`].
    pub fn suggest(&self, word: &str, lexicon: &Lexicon) -> Vec<Suggestion> {
        if word.is_empty() {
            return Vec::new();
        }
        let lower = word.to_ascii_lowercase();
        let mut candidates: Vec<String> = Vec::new();

        candidates.extend(filter_in_lexicon(deletions(&lower), lexicon));
        candidates.extend(filter_in_lexicon(insertions(&lower), lexicon));
        candidates.extend(filter_in_lexicon(substitutions(&lower), lexicon));
        candidates.extend(filter_in_lexicon(transpositions(&lower), lexicon));
        candidates.extend(splits(&lower, lexicon));
        candidates.extend(lexicon.phonetic_matches(&lower));
        candidates.extend(prefix_candidates(&lower, lexicon));

        let mut seen = hashbrown::HashSet::new();
        candidates.retain(|c| c != &lower && seen.insert(c.clone()));

        let mut scored: Vec<Suggestion> = candidates
            .into_iter()
            .map(|candidate| {
                let distance = levenshtein(&lower, &candidate);
                let freq = lexicon.frequency(&candidate);
                let score = self.score(&lower, &candidate, distance, freq);
                Suggestion {
                    word: candidate,
                    score,
                    edit_distance: distance,
                }
            })
            .collect();

        // Stable sort: candidates tied on score keep the generator order
        // above (edit-based, then phonetic, then prefix).
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap());
        scored.truncate(self.config.max_suggestions);
        scored
    }

    /// Every candidate within the configured `max_edit_distance` Damerau-
    /// Levenshtein edits of `word`, ordered by distance ascending and
    /// frequency descending. An alternative API surface alongside
    /// [`Suggester::suggest`]; Damerau-Levenshtein (not plain Levenshtein)
    /// is the point of offering this path at all.
    pub fn edit_distance_suggestions(
        &self,
        word: &str,
        lexicon: &Lexicon,
        candidates: impl IntoIterator<Item = String>,
    ) -> Vec<Suggestion> {
        let lower = word.to_ascii_lowercase();
        let mut out: Vec<Suggestion> = candidates
            .into_iter()
            .filter(|c| c != &lower)
            .filter_map(|candidate| {
                let distance = damerau_levenshtein(&lower, &candidate);
                if distance <= self.config.max_edit_distance {
                    Some(Suggestion {
                        word: candidate,
                        score: 0.0,
                        edit_distance: distance,
                    })
                } else {
                    None
                }
            })
            .collect();

        out.sort_by(|a, b| {
            a.edit_distance
                .cmp(&b.edit_distance)
                .then_with(|| lexicon.frequency(&b.word).cmp(&lexicon.frequency(&a.word)))
        });
        out.truncate(self.config.max_suggestions);
        out
    }

    fn score(&self, original: &str, candidate: &str, distance: usize, frequency: u64) -> f64 {
        let original_len = original.len().max(1) as f64;
        let max_len = original.len().max(candidate.len()).max(1) as f64;
        let min_len = original.len().min(candidate.len()) as f64;

        let edit_score = 1.0 / (1.0 + distance as f64);
        let freq_score = (1.0 + frequency as f64).ln() / 10.0;
        let length_ratio = min_len / max_len;
        let prefix_score = common_prefix_len(original, candidate) as f64 / original_len;

        self.config.edit_distance_weight * edit_score
            + self.config.frequency_weight * freq_score
            + 0.10 * length_ratio
            + self.config.prefix_weight * prefix_score
    }
}

/// `words_with_prefix(w[:len], 20)` unioned over `len ∈ [min(n,3), n]`.
fn prefix_candidates(word: &str, lexicon: &Lexicon) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    let start = n.min(3);
    let mut out = Vec::new();
    for len in start..=n {
        let prefix: String = chars[..len].iter().collect();
        out.extend(lexicon.words_with_prefix(&prefix, PREFIX_LOOKUP_LIMIT));
    }
    out
}

fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}

fn filter_in_lexicon(candidates: Vec<String>, lexicon: &Lexicon) -> Vec<String> {
    candidates
        .into_iter()
        .filter(|c| lexicon.contains(c))
        .collect()
}

/// Every string formed by deleting one character.
fn deletions(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    (0..chars.len())
        .map(|i| {
            chars
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, c)| *c)
                .collect()
        })
        .collect()
}

/// Every string formed by inserting one lowercase letter at any position.
fn insertions(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut out = Vec::with_capacity((chars.len() + 1) * ALPHABET.len());
    for i in 0..=chars.len() {
        for &b in ALPHABET {
            let mut candidate: Vec<char> = chars.clone();
            candidate.insert(i, b as char);
            out.push(candidate.into_iter().collect());
        }
    }
    out
}

/// Every string formed by replacing one character with another letter.
fn substitutions(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut out = Vec::with_capacity(chars.len() * ALPHABET.len());
    for i in 0..chars.len() {
        for &b in ALPHABET {
            if chars[i] == b as char {
                continue;
            }
            let mut candidate = chars.clone();
            candidate[i] = b as char;
            out.push(candidate.into_iter().collect());
        }
    }
    out
}

/// Every string formed by swapping two adjacent characters.
fn transpositions(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() < 2 {
        return Vec::new();
    }
    (0..chars.len() - 1)
        .map(|i| {
            let mut candidate = chars.clone();
            candidate.swap(i, i + 1);
            candidate.into_iter().collect()
        })
        .collect()
}

/// Every `"left right"` pair formed by inserting a space, where both
/// halves are independently present in the lexicon.
fn splits(word: &str, lexicon: &Lexicon) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut out = Vec::new();
    for i in 1..chars.len() {
        let left: String = chars[..i].iter().collect();
        let right: String = chars[i..].iter().collect();
        if lexicon.contains(&left) && lexicon.contains(&right) {
            out.push(format!("{left} {right}"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon_with(words: &[(&str, u64)]) -> Lexicon {
        let mut lex = Lexicon::new();
        for (word, freq) in words {
            lex.add_word_with_frequency(word, *freq);
        }
        lex
    }

    #[test]
    fn suggests_a_single_deletion_away() {
        let lex = lexicon_with(&[("hello", 100), ("help", 10)]);
        let suggester = Suggester::new(SuggesterConfig::default());
        let suggestions = suggester.suggest("helllo", &lex);
        assert!(suggestions.iter().any(|s| s.word == "hello"));
    }

    #[test]
    fn suggests_a_transposition() {
        let lex = lexicon_with(&[("form", 50)]);
        let suggester = Suggester::new(SuggesterConfig::default());
        let suggestions = suggester.suggest("from", &lex);
        assert!(suggestions.iter().any(|s| s.word == "form"));
    }

    #[test]
    fn suggests_a_split() {
        let lex = lexicon_with(&[("in", 1000), ("to", 1000)]);
        let suggester = Suggester::new(SuggesterConfig::default());
        let suggestions = suggester.suggest("into", &lex);
        assert!(suggestions.iter().any(|s| s.word == "in to"));
    }

    #[test]
    fn higher_frequency_candidate_ranks_first_among_equal_distance() {
        let lex = lexicon_with(&[("cat", 5), ("car", 500)]);
        let suggester = Suggester::new(SuggesterConfig::default());
        let suggestions = suggester.suggest("cbt", &lex);
        let positions: Vec<&str> = suggestions.iter().map(|s| s.word.as_str()).collect();
        let cat_pos = positions.iter().position(|&w| w == "cat");
        let car_pos = positions.iter().position(|&w| w == "car");
        if let (Some(cat_pos), Some(car_pos)) = (cat_pos, car_pos) {
            assert!(car_pos < cat_pos);
        }
    }

    #[test]
    fn max_suggestions_is_respected() {
        let mut lex = Lexicon::new();
        for c in 'a'..='z' {
            lex.add_word(&format!("{c}bc"));
        }
        let mut config = SuggesterConfig::default();
        config.set_max_suggestions(3);
        let suggester = Suggester::new(config);
        let suggestions = suggester.suggest("abd", &lex);
        assert!(suggestions.len() <= 3);
    }

    #[test]
    fn empty_word_yields_no_suggestions() {
        let lex = lexicon_with(&[("cat", 5)]);
        let suggester = Suggester::new(SuggesterConfig::default());
        assert!(suggester.suggest("", &lex).is_empty());
    }

    #[test]
    fn edit_distance_suggestions_respects_the_configured_bound() {
        let lex = lexicon_with(&[("cat", 10), ("cats", 5), ("category", 1)]);
        let mut config = SuggesterConfig::default();
        config.set_max_edit_distance(1);
        let suggester = Suggester::new(config);
        let candidates = vec!["cat".to_string(), "cats".to_string(), "category".to_string()];
        let suggestions = suggester.edit_distance_suggestions("cat", &lex, candidates);
        let words: Vec<&str> = suggestions.iter().map(|s| s.word.as_str()).collect();
        assert!(words.contains(&"cats"));
        assert!(!words.contains(&"category"));
    }
}

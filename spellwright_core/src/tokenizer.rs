//! Splits raw text into word tokens and source positions, and decides which
//! tokens are not worth checking (URLs, emails, numbers, too-short tokens).

use once_cell::sync::Lazy;
use regex::Regex;

/// A maximal match of `letter+ ( apostrophe letter+ )?`.
static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z]+('[A-Za-z]+)?").expect("static word regex"));

static URL_SCHEME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?i)(https?://|www\.)").expect("static url regex"));
static HOST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9-]+\.[A-Za-z]{2,}$").expect("static host regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[A-Za-z]{2,}$").expect("static email regex"));
static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(\.\d+)?$").expect("static number regex"));
static NON_WORD_CHAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z']").expect("static non-word-char regex"));

/// Knobs controlling tokenization and ignore rules. All setters exist so an
/// external INI-config loader (out of the engine's scope, see spec §6) can
/// populate one field at a time.
#[derive(Debug, Clone)]
pub struct TokenizerConfig {
    case_sensitive: bool,
    ignore_urls: bool,
    ignore_emails: bool,
    ignore_numbers: bool,
    min_word_length: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            case_sensitive: false,
            ignore_urls: true,
            ignore_emails: true,
            ignore_numbers: true,
            // "Token length <= 2 after normalization" is ignored, so the
            // shortest *checked* word is 3 characters.
            min_word_length: 3,
        }
    }
}

impl TokenizerConfig {
    pub fn set_case_sensitive(&mut self, value: bool) {
        self.case_sensitive = value;
    }

    pub fn set_ignore_urls(&mut self, value: bool) {
        self.ignore_urls = value;
    }

    pub fn set_ignore_emails(&mut self, value: bool) {
        self.ignore_emails = value;
    }

    pub fn set_ignore_numbers(&mut self, value: bool) {
        self.ignore_numbers = value;
    }

    pub fn set_min_word_length(&mut self, value: usize) {
        self.min_word_length = value;
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }
}

/// Stateless word extraction and classification over a [`TokenizerConfig`].
#[derive(Debug, Clone)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    pub fn new(config: TokenizerConfig) -> Self {
        tracing::debug!(?config, "tokenizer configured");
        Tokenizer { config }
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// `(word, byte_offset)` pairs in text order. Positions are measured
    /// against the original text, before normalization.
    pub fn extract_words(&self, text: &str) -> Vec<(String, usize)> {
        WORD_RE
            .find_iter(text)
            .map(|m| (m.as_str().to_string(), m.start()))
            .collect()
    }

    /// `(word, line, column)` triples, both 1-based. `column` is the byte
    /// offset within the line, plus one.
    pub fn extract_words_with_lines(&self, text: &str) -> Vec<(String, usize, usize)> {
        let mut line_number = 1usize;
        let mut line_start = 0usize;
        let mut out = Vec::new();
        for m in WORD_RE.find_iter(text) {
            let pos = m.start();
            while let Some(rel) = text[line_start..pos].find('\n') {
                line_start += rel + 1;
                line_number += 1;
            }
            let column = pos - line_start + 1;
            out.push((m.as_str().to_string(), line_number, column));
        }
        out
    }

    /// Strips characters outside `[a-zA-Z']` and, unless case-sensitive mode
    /// is on, lowercases the result.
    pub fn normalize_word(&self, word: &str) -> String {
        let stripped: String = word
            .chars()
            .filter(|c| c.is_ascii_alphabetic() || *c == '\'')
            .collect();
        if self.config.case_sensitive {
            stripped
        } else {
            stripped.to_ascii_lowercase()
        }
    }

    /// Evaluates the ignore rules in spec order; any match short-circuits.
    pub fn should_ignore(&self, token: &str) -> bool {
        let normalized = self.normalize_word(token);
        if normalized.len() < self.config.min_word_length {
            return true;
        }
        if self.config.ignore_urls && (URL_SCHEME_RE.is_match(token) || HOST_RE.is_match(token)) {
            return true;
        }
        if self.config.ignore_emails && EMAIL_RE.is_match(token) {
            return true;
        }
        if self.config.ignore_numbers && NUMBER_RE.is_match(token) {
            return true;
        }
        let lower = normalized.to_ascii_lowercase();
        NON_WORD_CHAR_RE.is_match(&lower)
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer::new(TokenizerConfig::default())
    }
}

//! Keyword extraction for building search queries.
//!
//! Ranks the most frequent non-stopword terms of a text and returns them in
//! descending frequency order. The extractor is a pure function of its input
//! text plus the stopword list selected at construction time.

pub mod error;
pub mod stopwords;

#[cfg(test)]
mod tests;

pub use error::KeywordError;
pub use stopwords::{BUILTIN_LANGUAGES, StopwordConfig};

use std::collections::{HashMap, HashSet};

/// Language used by [`KeywordExtractor::english`].
pub const DEFAULT_LANGUAGE: &str = "en";

/// Default cap on the number of extracted keywords.
pub const DEFAULT_MAX_WORDS: usize = 10;

/// Default minimum token length (in characters) for a keyword.
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Extracts the most relevant words of a text for one configured language.
///
/// Construction fails for a language without a stopword list; after that,
/// [`extract`](KeywordExtractor::extract) is infallible.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    stopwords: HashSet<String>,
    language: String,
}

impl KeywordExtractor {
    /// Creates an extractor for `language` (ISO 639-1, case-insensitive).
    pub fn new(config: &StopwordConfig, language: &str) -> Result<Self, KeywordError> {
        let language = language.trim().to_lowercase();

        let stopwords =
            config
                .words(&language)
                .cloned()
                .ok_or_else(|| KeywordError::UnsupportedLanguage {
                    language: language.clone(),
                })?;

        Ok(Self {
            stopwords,
            language,
        })
    }

    /// Creates an extractor with the built-in English stopword list.
    pub fn english() -> Self {
        Self {
            stopwords: stopwords::english_set(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Returns the configured language code.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Extracts the most relevant words of `text`, ranked by descending
    /// frequency with ties kept in first-occurrence order.
    ///
    /// Tokens shorter than `min_length` characters, purely numeric tokens and
    /// stopwords are dropped. `max_words == 0` means no limit.
    pub fn extract(&self, text: &str, max_words: usize, min_length: usize) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let normalized = normalize(text);

        let mut order: Vec<&str> = Vec::new();
        let mut frequencies: HashMap<&str, usize> = HashMap::new();

        for token in normalized.split_whitespace() {
            if !self.keeps(token, min_length) {
                continue;
            }
            if !frequencies.contains_key(token) {
                order.push(token);
            }
            *frequencies.entry(token).or_insert(0) += 1;
        }

        // `order` holds first-occurrence order; the stable sort on frequency
        // alone preserves it between equal counts.
        let mut ranked = order;
        ranked.sort_by(|a, b| frequencies[b].cmp(&frequencies[a]));

        if max_words > 0 {
            ranked.truncate(max_words);
        }

        ranked.into_iter().map(str::to_string).collect()
    }

    fn keeps(&self, token: &str, min_length: usize) -> bool {
        if token.chars().count() < min_length {
            return false;
        }

        if token.chars().all(char::is_numeric) {
            return false;
        }

        !self.stopwords.contains(token)
    }
}

/// Lowercases and strips punctuation, keeping letters, digits and whitespace.
/// Tokens are the contiguous letter/digit runs left over.
fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}

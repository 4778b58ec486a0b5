//! Lexical similarity between two texts.
//!
//! Cosine similarity over term-frequency vectors: measures lexical overlap,
//! not meaning. Scores are bounded to `[0.0, 1.0]`; identical non-empty
//! texts score `1.0` up to floating-point tolerance, and a text with no
//! tokens after normalization scores `0.0` against anything.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

/// Compares two texts and returns their lexical similarity in `[0.0, 1.0]`.
pub fn compare(text_a: &str, text_b: &str) -> f64 {
    let normalized_a = normalize(text_a);
    let normalized_b = normalize(text_b);

    let tokens_a = tokenize(&normalized_a);
    let tokens_b = tokenize(&normalized_b);

    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    cosine(&term_frequencies(&tokens_a), &term_frequencies(&tokens_b))
}

/// Compares one original text against each candidate, returning the scores
/// in input order.
pub fn compare_many(original: &str, candidates: &[&str]) -> Vec<f64> {
    candidates
        .iter()
        .map(|candidate| compare(original, candidate))
        .collect()
}

/// Lowercases and replaces non-word characters with spaces.
fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}

fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

fn term_frequencies<'a>(tokens: &[&'a str]) -> HashMap<&'a str, f64> {
    let mut frequencies = HashMap::new();
    for token in tokens {
        *frequencies.entry(*token).or_insert(0.0) += 1.0;
    }
    frequencies
}

fn cosine(freq_a: &HashMap<&str, f64>, freq_b: &HashMap<&str, f64>) -> f64 {
    let dot: f64 = freq_a
        .iter()
        .filter_map(|(term, a)| freq_b.get(term).map(|b| a * b))
        .sum();

    let norm = magnitude(freq_a) * magnitude(freq_b);
    if norm == 0.0 {
        return 0.0;
    }

    (dot / norm).clamp(0.0, 1.0)
}

fn magnitude(freq: &HashMap<&str, f64>) -> f64 {
    freq.values().map(|f| f * f).sum::<f64>().sqrt()
}

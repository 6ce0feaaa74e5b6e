//! Text statistics
//!
//! Counts and derived ratios over a single document. Word boundaries are
//! whitespace; sentence boundaries come from [`split_sentences`].

use crate::text::split_sentences;
use serde::Serialize;
use std::collections::HashSet;

/// Statistics computed from one document
///
/// Serialized as a flat JSON object of metric name to number. Averages are
/// rounded to two decimals and are `0.0` (never NaN) for empty input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TextStatistics {
    /// Number of characters (Unicode scalar values), whitespace included
    pub character_count: usize,

    /// Number of whitespace-delimited words
    pub word_count: usize,

    /// Number of sentences
    pub sentence_count: usize,

    /// Number of distinct words, case-insensitive, ignoring surrounding punctuation
    pub unique_word_count: usize,

    /// Mean characters per word
    pub average_word_length: f64,

    /// Mean words per sentence
    pub average_sentence_length: f64,
}

/// Computes statistics for the given text
///
/// Never fails; empty or whitespace-only input yields all zeros.
///
/// # Examples
///
/// ```
/// use text_sieve::analyze;
///
/// let stats = analyze("Hello world. Goodbye world!");
/// assert_eq!(stats.word_count, 4);
/// assert_eq!(stats.sentence_count, 2);
/// assert_eq!(stats.average_sentence_length, 2.0);
/// ```
pub fn analyze(text: &str) -> TextStatistics {
    let words: Vec<&str> = text.split_whitespace().collect();
    let word_count = words.len();
    let sentence_count = split_sentences(text).len();

    let total_word_chars: usize = words.iter().map(|w| w.chars().count()).sum();

    let unique_word_count = words
        .iter()
        .map(|w| word_key(w))
        .filter(|key| !key.is_empty())
        .collect::<HashSet<_>>()
        .len();

    TextStatistics {
        character_count: text.chars().count(),
        word_count,
        sentence_count,
        unique_word_count,
        average_word_length: ratio(total_word_chars, word_count),
        average_sentence_length: ratio(word_count, sentence_count),
    }
}

/// Lowercased word with leading/trailing punctuation removed
fn word_key(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

/// Division rounded to two decimals, zero when the denominator is zero
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    let value = numerator as f64 / denominator as f64;
    (value * 100.0).round() / 100.0
}

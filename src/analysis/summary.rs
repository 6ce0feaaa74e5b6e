//! Extractive summarization.
//!
//! Strategy: score every sentence by the average document frequency of its
//! content words, keep the `n` best (earlier sentence wins a tie) and emit
//! them in document order. No randomness, so the same text always yields the
//! same summary.

use crate::text::split_sentences;
use serde::Serialize;
use std::collections::HashMap;
use std::num::NonZeroUsize;

/// Stop words to exclude from frequency scoring
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", "must", "shall", "can", "need",
    "it", "its", "this", "that", "these", "those", "i", "you", "he", "she", "we", "they", "what",
    "which", "who", "when", "where", "why", "how", "all", "each", "every", "both", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "just", "also", "now", "here", "there", "then", "once", "if", "while",
    "although", "because", "until", "unless", "about", "into", "through", "during", "before",
    "after", "above", "below", "between", "under", "again", "further", "any", "am", "being",
    "him", "her", "his", "hers", "me", "my", "our", "us", "them", "their", "your", "said",
];

/// An ordered selection of sentences taken verbatim from a document
///
/// Serializes as a JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Summary(Vec<String>);

impl Summary {
    /// The selected sentences, in document order
    pub fn sentences(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Builds an extractive summary of at most `sentence_count` sentences
///
/// When the text has no more sentences than requested, every sentence is
/// returned.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroUsize;
/// use text_sieve::summarize;
///
/// let summary = summarize("Cats purr. Dogs bark. Cats sleep.", NonZeroUsize::new(5).unwrap());
/// assert_eq!(summary.len(), 3);
/// ```
pub fn summarize(text: &str, sentence_count: NonZeroUsize) -> Summary {
    let sentences = split_sentences(text);
    let limit = sentence_count.get();

    if sentences.len() <= limit {
        return Summary(sentences.into_iter().map(str::to_string).collect());
    }

    let frequencies = word_frequencies(text);

    let mut ranked: Vec<(usize, f64)> = sentences
        .iter()
        .enumerate()
        .map(|(index, sentence)| (index, score_sentence(sentence, &frequencies)))
        .collect();

    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

    let mut picked: Vec<usize> = ranked.into_iter().take(limit).map(|(i, _)| i).collect();
    picked.sort_unstable();

    Summary(picked.into_iter().map(|i| sentences[i].to_string()).collect())
}

/// Lowercase alphanumeric tokens of a piece of text
fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
}

fn is_content_word(word: &str) -> bool {
    word.chars().count() > 1 && !STOP_WORDS.contains(&word)
}

/// Counts content-word occurrences over the whole document
fn word_frequencies(text: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for word in tokens(text).filter(|w| is_content_word(w)) {
        *counts.entry(word).or_insert(0) += 1;
    }
    counts
}

/// Sum of content-word frequencies divided by the sentence's word count
fn score_sentence(sentence: &str, frequencies: &HashMap<String, usize>) -> f64 {
    let mut total_words = 0usize;
    let mut score = 0usize;

    for word in tokens(sentence) {
        total_words += 1;
        if let Some(count) = frequencies.get(&word) {
            score += count;
        }
    }

    if total_words == 0 {
        0.0
    } else {
        score as f64 / total_words as f64
    }
}

/// Characters removed outright before whitespace is collapsed
///
/// `_` is Gutenberg's italics markup (`_word_`); the rest are invisible
/// formatting characters that would otherwise glue words together.
const DROPPED_CHARS: &[char] = &['_', '\u{feff}', '\u{200b}', '\u{200c}', '\u{200d}', '\u{2060}'];

/// Produces the canonical plain-text form of a document
///
/// Performs the following operations:
/// - Removes byte-order marks, zero-width characters and `_` emphasis markup
/// - Removes control characters other than whitespace
/// - Collapses every run of Unicode whitespace (including line breaks) into one space
/// - Trims leading/trailing whitespace
///
/// Sentence punctuation is left untouched. The function is idempotent:
/// `normalize_text(&normalize_text(x)) == normalize_text(x)`.
///
/// # Examples
///
/// ```
/// use text_sieve::normalize_text;
///
/// let text = "It was the _best_ of times,\r\nit was the worst   of times.\n";
/// assert_eq!(normalize_text(text), "It was the best of times, it was the worst of times.");
/// ```
pub fn normalize_text(text: &str) -> String {
    let filtered: String = text
        .chars()
        .filter(|&c| !DROPPED_CHARS.contains(&c) && !(c.is_control() && !c.is_whitespace()))
        .collect();

    let mut normalized = String::with_capacity(filtered.len());
    for word in filtered.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(word);
    }

    normalized
}

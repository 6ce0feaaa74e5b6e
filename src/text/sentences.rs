/// Sentence-ending punctuation
const TERMINATORS: &[char] = &['.', '!', '?'];

/// Characters that may trail a terminator and still belong to the sentence
const CLOSERS: &[char] = &['"', '\'', '\u{201d}', '\u{2019}', ')', ']'];

/// Titles that precede a name; their period never ends a sentence
const TITLES: &[&str] = &[
    "mr", "mrs", "ms", "dr", "st", "prof", "rev", "capt", "col", "gen", "lt", "sgt",
];

/// Abbreviations that may also close a sentence; they end one only when the
/// next word is capitalized
const ABBREVIATIONS: &[&str] = &[
    "jr", "sr", "vs", "etc", "e.g", "i.e", "viz", "vol", "ch", "fig",
];

/// Splits text into sentences
///
/// A sentence ends after a run of `.`, `!` or `?` (optionally followed by
/// closing quotes or brackets) when the next character is whitespace or the
/// end of the text. A single period after a title such as "Mr." never ends a
/// sentence; after an abbreviation such as "e.g." or "etc." it does only when
/// the next word starts with an uppercase letter. No whitespace after the
/// punctuation means no boundary, so "3.14" and "end.Start" stay whole. A
/// trailing fragment without
/// terminal punctuation counts as a sentence. Sentences are trimmed and empty
/// segments are dropped.
///
/// This is the single definition of a sentence used by both the statistics
/// and the summary, so their counts always agree.
///
/// # Examples
///
/// ```
/// use text_sieve::split_sentences;
///
/// let sentences = split_sentences("Hello world. Goodbye world! And then");
/// assert_eq!(sentences, vec!["Hello world.", "Goodbye world!", "And then"]);
/// ```
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !TERMINATORS.contains(&c) {
            continue;
        }

        let mut end = i + c.len_utf8();
        while let Some(&(j, next)) = chars.peek() {
            if TERMINATORS.contains(&next) || CLOSERS.contains(&next) {
                end = j + next.len_utf8();
                chars.next();
            } else {
                break;
            }
        }

        let at_boundary = chars.peek().map_or(true, |&(_, next)| next.is_whitespace());
        if at_boundary && !continues_after_abbreviation(&text[start..end], &text[end..]) {
            push_sentence(&mut sentences, &text[start..end]);
            start = end;
        }
    }

    push_sentence(&mut sentences, &text[start..]);
    sentences
}

/// True when the period closing `segment` belongs to an abbreviation and the
/// sentence carries on into `rest`
fn continues_after_abbreviation(segment: &str, rest: &str) -> bool {
    let Some(without_period) = segment.strip_suffix('.') else {
        return false;
    };
    let last_word = without_period
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();

    if TITLES.contains(&last_word.as_str()) {
        return true;
    }
    if !ABBREVIATIONS.contains(&last_word.as_str()) {
        return false;
    }

    let next_is_capitalized = rest
        .trim_start()
        .trim_start_matches(['"', '\'', '\u{201c}', '\u{2018}', '(', '['])
        .chars()
        .next()
        .is_some_and(char::is_uppercase);
    !next_is_capitalized
}

fn push_sentence<'a>(sentences: &mut Vec<&'a str>, segment: &'a str) {
    let segment = segment.trim();
    if !segment.is_empty() {
        sentences.push(segment);
    }
}

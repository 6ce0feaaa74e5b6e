//! Project Gutenberg boilerplate removal
//!
//! Gutenberg plain-text files wrap the book between two marker lines:
//!
//! ```text
//! *** START OF THE PROJECT GUTENBERG EBOOK PRIDE AND PREJUDICE ***
//! ...
//! *** END OF THE PROJECT GUTENBERG EBOOK PRIDE AND PREJUDICE ***
//! ```
//!
//! Older releases say "THIS" instead of "THE" and may carry a closing
//! "End of the Project Gutenberg EBook of ..." line just before the end marker.

use regex::Regex;
use std::sync::OnceLock;

fn start_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?im)^[^\n]*\*+[ \t]*START OF (?:THE|THIS) PROJECT GUTENBERG E-?BOOK[^\n]*$")
            .expect("start marker pattern is valid")
    })
}

fn end_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?im)^[^\n]*\*+[ \t]*END OF (?:THE|THIS) PROJECT GUTENBERG E-?BOOK[^\n]*$")
            .expect("end marker pattern is valid")
    })
}

fn legacy_footer() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?im)^[ \t]*End of (?:the )?Project Gutenberg(?:'s|’s| E-?Book| E-?text)[^\n]*$")
            .expect("legacy footer pattern is valid")
    })
}

/// Strips Project Gutenberg header and footer boilerplate
///
/// Returns the text strictly between the start-marker line and the
/// end-marker line, trimmed. A missing marker leaves that side open. When
/// neither marker is present the input is returned unchanged.
///
/// # Example
///
/// ```
/// use text_sieve::clean_gutenberg_text;
///
/// let raw = "License blurb\n*** START OF THE PROJECT GUTENBERG EBOOK X ***\nIt begins.\n*** END OF THE PROJECT GUTENBERG EBOOK X ***\nMore license";
/// assert_eq!(clean_gutenberg_text(raw), "It begins.");
/// ```
pub fn clean_gutenberg_text(raw: &str) -> String {
    let start = start_marker().find(raw).map(|m| m.end());

    let body_start = start.unwrap_or(0);
    let end = end_marker()
        .find(&raw[body_start..])
        .map(|m| body_start + m.start());

    if start.is_none() && end.is_none() {
        tracing::debug!("No Gutenberg markers found, leaving text unchanged");
        return raw.to_string();
    }

    let body = &raw[body_start..end.unwrap_or(raw.len())];
    let body = strip_legacy_footer(body);

    tracing::debug!(
        "Stripped boilerplate: kept {} of {} bytes",
        body.len(),
        raw.len()
    );

    body.trim().to_string()
}

/// Drops a trailing "End of the Project Gutenberg EBook of ..." line
fn strip_legacy_footer(body: &str) -> &str {
    match legacy_footer().find_iter(body).last() {
        Some(m) if body[m.end()..].trim().is_empty() => &body[..m.start()],
        _ => body,
    }
}

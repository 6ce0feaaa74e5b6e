//! Preprocessing pipeline
//!
//! [`Preprocessor`] bundles the HTTP client with the pipeline defaults. It is
//! built once at startup and holds no mutable state, so a single instance is
//! shared by every request handler behind an `Arc`.

use crate::analysis::{analyze, summarize, Summary, TextStatistics};
use crate::config::Config;
use crate::fetcher::{build_http_client, fetch_text};
use crate::text::{clean_gutenberg_text, normalize_text};
use crate::{ConfigError, FetchResult};
use reqwest::Client;
use std::num::NonZeroUsize;

/// Output of the full fetch, clean, normalize, analyze and summarize pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedDocument {
    /// Boilerplate-free, normalized text
    pub cleaned_text: String,

    /// Statistics over `cleaned_text`
    pub statistics: TextStatistics,

    /// Extractive summary of `cleaned_text`
    pub summary: Summary,
}

/// Stateless text preprocessing component
#[derive(Debug, Clone)]
pub struct Preprocessor {
    client: Client,
    max_body_bytes: u64,
    summary_sentences: NonZeroUsize,
}

impl Preprocessor {
    /// Creates a preprocessor from configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Preprocessor)` - Ready to serve requests
    /// * `Err(SieveError)` - The HTTP client could not be built or the summary length is zero
    pub fn new(config: &Config) -> crate::Result<Self> {
        let client = build_http_client(&config.fetcher, &config.user_agent)?;
        let summary_sentences = NonZeroUsize::new(config.summary.sentence_count).ok_or_else(|| {
            ConfigError::Validation("sentence_count must be >= 1".to_string())
        })?;

        Ok(Self {
            client,
            max_body_bytes: config.fetcher.max_body_bytes,
            summary_sentences,
        })
    }

    /// Number of sentences in summaries produced by [`process_url`](Self::process_url)
    pub fn summary_sentences(&self) -> NonZeroUsize {
        self.summary_sentences
    }

    /// Retrieves the raw text behind `url`
    pub async fn fetch_from_url(&self, url: &str) -> FetchResult<String> {
        fetch_text(&self.client, url, self.max_body_bytes).await
    }

    /// Runs the whole pipeline for a remote document
    ///
    /// Fetch failures abort the pipeline; the remaining stages cannot fail.
    pub async fn process_url(&self, url: &str) -> FetchResult<ProcessedDocument> {
        let raw = self.fetch_from_url(url).await?;
        Ok(self.process_text(&raw))
    }

    /// Runs the clean, normalize, analyze and summarize stages on raw text
    pub fn process_text(&self, raw: &str) -> ProcessedDocument {
        let cleaned = clean_gutenberg_text(raw);
        let cleaned_text = normalize_text(&cleaned);
        let statistics = analyze(&cleaned_text);
        let summary = summarize(&cleaned_text, self.summary_sentences);

        tracing::debug!(
            "Processed document: {} words, {} sentences, {} summary sentences",
            statistics.word_count,
            statistics.sentence_count,
            summary.len()
        );

        ProcessedDocument {
            cleaned_text,
            statistics,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SieveError;

    const BOOK: &str = "Produced by volunteers.\r\n\r\n*** START OF THE PROJECT GUTENBERG EBOOK TEST ***\r\n\r\nThe river ran north.  The river\r\nwas cold. Birds sang. The river froze in winter. Nobody came.\r\n\r\n*** END OF THE PROJECT GUTENBERG EBOOK TEST ***\r\nLicense text follows.";

    #[test]
    fn test_new_from_default_config() {
        let preprocessor = Preprocessor::new(&Config::default()).unwrap();
        assert_eq!(preprocessor.summary_sentences().get(), 3);
    }

    #[test]
    fn test_new_rejects_zero_summary() {
        let mut config = Config::default();
        config.summary.sentence_count = 0;
        assert!(matches!(
            Preprocessor::new(&config),
            Err(SieveError::Config(ConfigError::Validation(_)))
        ));
    }

    #[test]
    fn test_process_text() {
        let preprocessor = Preprocessor::new(&Config::default()).unwrap();
        let document = preprocessor.process_text(BOOK);

        assert_eq!(
            document.cleaned_text,
            "The river ran north. The river was cold. Birds sang. The river froze in winter. Nobody came."
        );
        assert_eq!(document.statistics.word_count, 17);
        assert_eq!(document.statistics.sentence_count, 5);
        assert_eq!(document.summary.len(), 3);
    }
}

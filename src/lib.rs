//! Text-Sieve: a small plain-text preprocessing service
//!
//! This crate fetches Project Gutenberg style `.txt` documents, strips their
//! licensing boilerplate, normalizes whitespace, computes simple statistics
//! and builds a naive extractive summary. The pipeline is exposed over a JSON
//! HTTP API (see [`server`]).

pub mod analysis;
pub mod config;
pub mod fetcher;
pub mod preprocess;
pub mod server;
pub mod text;

use thiserror::Error;

/// Main error type for Text-Sieve operations
#[derive(Debug, Error)]
pub enum SieveError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors raised while retrieving a remote document
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Could not reach {url}: {message}")]
    Unreachable { url: String, message: String },

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Failed to fetch {url}: HTTP status {status}")]
    Status { url: String, status: u16 },

    #[error("Content at {url} is not text (Content-Type: {content_type})")]
    NotText { url: String, content_type: String },

    #[error("Content at {url} exceeds the {limit} byte limit")]
    TooLarge { url: String, limit: u64 },

    #[error("Failed to decode body from {url}: {message}")]
    Decode { url: String, message: String },
}

/// Result type alias for Text-Sieve operations
pub type Result<T> = std::result::Result<T, SieveError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for fetch operations
pub type FetchResult<T> = std::result::Result<T, FetchError>;

// Re-export commonly used types
pub use analysis::{analyze, summarize, Summary, TextStatistics};
pub use config::Config;
pub use preprocess::{Preprocessor, ProcessedDocument};
pub use text::{clean_gutenberg_text, normalize_text, split_sentences};

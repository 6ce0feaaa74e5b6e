//! Configuration module for Text-Sieve
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use text_sieve::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("text-sieve.toml")).unwrap();
//! println!("Summary length: {}", config.summary.sentence_count);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetcherConfig, ServerConfig, SummaryConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};

// Re-export validation for settings overridden after loading
pub use validation::validate;

//! Text module for turning raw documents into canonical plain text
//!
//! This module contains the string-processing stages of the pipeline:
//! - Gutenberg boilerplate removal
//! - Whitespace normalization
//! - Sentence splitting shared by statistics and summaries
//!
//! Every function here is pure and returns a new value.

mod cleaner;
mod normalizer;
mod sentences;

pub use cleaner::clean_gutenberg_text;
pub use normalizer::normalize_text;
pub use sentences::split_sentences;

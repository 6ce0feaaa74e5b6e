//! Analysis module for statistics and summaries
//!
//! Both operate on already-normalized text (the analyze endpoint is the one
//! caller that passes raw text through unchanged).

mod stats;
mod summary;

pub use stats::{analyze, TextStatistics};
pub use summary::{summarize, Summary};
